pub const FPS_UPDATE_INTERVAL: f32 = 1.0;

/// Frame metadata - carries frame number and timing info
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInfo {
    pub number: u64,
    /// Session time the frame was sampled at
    pub time: f32,
    pub delta: f32,
}

impl FrameInfo {
    pub fn new(number: u64, time: f32, delta: f32) -> Self {
        Self { number, time, delta }
    }
}

/// Frames-per-second over a rolling one-second window
#[derive(Debug, Clone, Default)]
pub struct FpsCounter {
    frame_count: u32,
    elapsed: f32,
    fps: f32,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a frame; returns the new rate when a window closes
    pub fn record(&mut self, delta: f32) -> Option<f32> {
        self.frame_count += 1;
        self.elapsed += delta;

        if self.elapsed >= FPS_UPDATE_INTERVAL {
            self.fps = self.frame_count as f32 / self.elapsed;
            self.frame_count = 0;
            self.elapsed = 0.0;
            Some(self.fps)
        } else {
            None
        }
    }

    /// Last reported rate
    pub fn fps(&self) -> f32 {
        self.fps
    }
}
