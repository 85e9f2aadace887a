//! Fit-to-screen scaling and overflow detection for wide comparison tables.
//!
//! Widths are unitless. The defaults are tuned for pixels; the terminal UI
//! uses [`FitConfig::terminal`], which measures in character cells.

/// Layout constants for scaling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitConfig {
    /// Horizontal padding around the table
    pub desktop_padding: f64,
    /// Extra room for scrollbars and borders
    pub safety_margin: f64,
    /// Multiplier applied to the raw scale so rounding never overflows
    pub scale_buffer: f64,
    /// Narrower viewports never report overflow or stay zoomed out
    pub desktop_breakpoint: f64,
    /// Content may exceed the container by this much before it counts
    pub scroll_threshold: f64,
}

impl Default for FitConfig {
    fn default() -> Self {
        Self {
            desktop_padding: 48.0,
            safety_margin: 8.0,
            scale_buffer: 0.99,
            desktop_breakpoint: 768.0,
            scroll_threshold: 5.0,
        }
    }
}

impl FitConfig {
    /// Constants for a character-cell viewport.
    pub const fn terminal() -> Self {
        Self {
            desktop_padding: 2.0,
            safety_margin: 1.0,
            scale_buffer: 0.99,
            desktop_breakpoint: 60.0,
            scroll_threshold: 0.0,
        }
    }

    /// Scale that makes `content_width` fit in `viewport_width`, never above 1.
    pub fn scale_to_fit(&self, content_width: f64, viewport_width: f64) -> f64 {
        if content_width <= 0.0 {
            return 1.0;
        }
        let usable = viewport_width - self.desktop_padding - self.safety_margin;
        let scale = usable / content_width * self.scale_buffer;
        scale.clamp(0.0, 1.0)
    }

    pub fn is_desktop(&self, viewport_width: f64) -> bool {
        viewport_width >= self.desktop_breakpoint
    }
}

/// Measured sizes the fit state reacts to.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TableMetrics {
    pub viewport_width: f64,
    pub container_width: f64,
    pub content_width: f64,
    pub content_height: f64,
}

/// Zoom and overflow state of one comparison table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitState {
    config: FitConfig,
    metrics: TableMetrics,
    overflow: bool,
    scale: Option<f64>,
}

impl Default for FitState {
    fn default() -> Self {
        Self::new(FitConfig::default())
    }
}

impl FitState {
    pub const fn new(config: FitConfig) -> Self {
        Self {
            config,
            metrics: TableMetrics {
                viewport_width: 0.0,
                container_width: 0.0,
                content_width: 0.0,
                content_height: 0.0,
            },
            overflow: false,
            scale: None,
        }
    }

    pub const fn config(&self) -> &FitConfig {
        &self.config
    }

    /// Whether the content is wider than its container on a desktop viewport.
    pub const fn has_overflow(&self) -> bool {
        self.overflow
    }

    pub const fn is_zoomed_out(&self) -> bool {
        self.scale.is_some()
    }

    /// Current scale, 1 when not zoomed.
    pub fn scale(&self) -> f64 {
        self.scale.unwrap_or(1.0)
    }

    /// Container height matching the scaled content.
    pub fn container_height(&self) -> f64 {
        self.metrics.content_height * self.scale()
    }

    /// A container or content size changed. Re-detects overflow only.
    pub fn observe(&mut self, metrics: TableMetrics) {
        self.metrics = metrics;
        self.detect_overflow();
        if !self.config.is_desktop(metrics.viewport_width) {
            self.scale = None;
        }
    }

    /// The viewport itself was resized. Re-detects overflow and drops any zoom.
    pub fn viewport_resized(&mut self, metrics: TableMetrics) {
        self.metrics = metrics;
        self.detect_overflow();
        self.scale = None;
    }

    /// Zoom out to fit, or restore natural size when already zoomed.
    pub fn toggle(&mut self) {
        if self.scale.is_some() {
            self.scale = None;
        } else {
            self.scale = Some(
                self.config
                    .scale_to_fit(self.metrics.content_width, self.metrics.viewport_width),
            );
        }
    }

    pub fn reset(&mut self) {
        self.scale = None;
    }

    fn detect_overflow(&mut self) {
        let m = &self.metrics;
        self.overflow = self.config.is_desktop(m.viewport_width)
            && m.content_width > m.container_width + self.config.scroll_threshold;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(viewport: f64, container: f64, content: f64) -> TableMetrics {
        TableMetrics {
            viewport_width: viewport,
            container_width: container,
            content_width: content,
            content_height: 600.0,
        }
    }

    #[test]
    fn test_scale_formula() {
        let config = FitConfig::default();
        // (1000 - 48 - 8) / 1600 * 0.99
        let expected = 944.0 / 1600.0 * 0.99;
        assert!((config.scale_to_fit(1600.0, 1000.0) - expected).abs() < 1e-9);
        assert!((config.scale_to_fit(500.0, 1000.0) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_overflow_threshold_and_breakpoint() {
        let mut state = FitState::default();
        state.observe(metrics(1200.0, 1000.0, 1005.0));
        assert!(!state.has_overflow());
        state.observe(metrics(1200.0, 1000.0, 1006.0));
        assert!(state.has_overflow());
        state.observe(metrics(700.0, 600.0, 1600.0));
        assert!(!state.has_overflow());
    }

    #[test]
    fn test_toggle_and_height() {
        let mut state = FitState::default();
        state.observe(metrics(1000.0, 944.0, 1600.0));
        state.toggle();
        assert!(state.is_zoomed_out());
        assert!(state.scale() < 1.0);
        assert!((state.container_height() - 600.0 * state.scale()).abs() < 1e-9);
        state.toggle();
        assert!(!state.is_zoomed_out());
        assert!((state.container_height() - 600.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_resize_resets_zoom() {
        let mut state = FitState::default();
        state.observe(metrics(1000.0, 944.0, 1600.0));
        state.toggle();
        state.viewport_resized(metrics(1400.0, 1344.0, 1600.0));
        assert!(!state.is_zoomed_out());
        assert!(state.has_overflow());
    }

    #[test]
    fn test_dropping_below_breakpoint_resets_zoom() {
        let mut state = FitState::default();
        state.observe(metrics(1000.0, 944.0, 1600.0));
        state.toggle();
        state.observe(metrics(700.0, 650.0, 1600.0));
        assert!(!state.is_zoomed_out());
    }
}
