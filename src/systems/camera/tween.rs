/// Camera property a tween drives
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    PosX,
    PosY,
    PosZ,
    /// Pitch (rotation about X)
    RotX,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Easing {
    Linear,
    CubicOut,
}

impl Easing {
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::CubicOut => {
                let u = t - 1.0;
                u * u * u + 1.0
            }
        }
    }
}

/// One scalar animation. A leg runs `from -> to` in `duration_ms`; with
/// `yoyo` every other leg runs back. `repeat` extra legs follow the first.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    pub channel: Channel,
    pub from: f32,
    pub to: f32,
    pub start_ms: f64,
    pub duration_ms: f64,
    pub easing: Easing,
    pub yoyo: bool,
    pub repeat: u32,
}

impl Tween {
    pub fn new(channel: Channel, from: f32, to: f32, start_ms: f64, duration_ms: f64) -> Self {
        Self {
            channel,
            from,
            to,
            start_ms,
            duration_ms,
            easing: Easing::Linear,
            yoyo: false,
            repeat: 0,
        }
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn yoyo(mut self, yoyo: bool) -> Self {
        self.yoyo = yoyo;
        self
    }

    pub fn repeat(mut self, repeat: u32) -> Self {
        self.repeat = repeat;
        self
    }

    fn legs(&self) -> u32 {
        self.repeat + 1
    }

    pub fn end_ms(&self) -> f64 {
        self.start_ms + self.duration_ms * self.legs() as f64
    }

    /// Value at the end of the last leg
    pub fn final_value(&self) -> f32 {
        if self.yoyo && self.legs() % 2 == 0 {
            self.from
        } else {
            self.to
        }
    }

    /// Value at `now_ms` and whether the tween has finished
    pub fn sample(&self, now_ms: f64) -> (f32, bool) {
        if now_ms < self.start_ms {
            return (self.from, false);
        }
        if self.duration_ms <= 0.0 || now_ms >= self.end_ms() {
            return (self.final_value(), true);
        }

        let elapsed = now_ms - self.start_ms;
        let leg = (elapsed / self.duration_ms).floor() as u32;
        let t = ((elapsed - leg as f64 * self.duration_ms) / self.duration_ms) as f32;
        let eased = self.easing.apply(t.clamp(0.0, 1.0));

        let (a, b) = if self.yoyo && leg % 2 == 1 {
            (self.to, self.from)
        } else {
            (self.from, self.to)
        };
        (a + (b - a) * eased, false)
    }
}
