/// Initial window and scene configuration, builder style.
#[derive(Clone)]
pub struct DemoConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub vsync: bool,
    /// Starting subdivision level of the planet icosphere.
    pub planet_subdivisions: u32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            title: "Orrery".to_string(),
            width: 1280,
            height: 720,
            vsync: true,
            planet_subdivisions: 4,
        }
    }
}

impl DemoConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_vsync(mut self, vsync: bool) -> Self {
        self.vsync = vsync;
        self
    }

    pub fn with_planet_subdivisions(mut self, level: u32) -> Self {
        self.planet_subdivisions = level;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_overrides_defaults() {
        let cfg = DemoConfig::new()
            .with_title("test")
            .with_size(640, 480)
            .with_vsync(false)
            .with_planet_subdivisions(2);
        assert_eq!(cfg.title, "test");
        assert_eq!((cfg.width, cfg.height), (640, 480));
        assert!(!cfg.vsync);
        assert_eq!(cfg.planet_subdivisions, 2);
    }
}
