//! Design tokens and component-library configuration.
//!
//! Static, immutable value objects loaded at process start and shared by
//! reference across all requests. Nothing here is mutated after startup.

/// Color palette tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Colors {
    /// Primary brand color.
    pub primary: &'static str,
    /// White.
    pub white: &'static str,
    /// Near-black text color.
    pub black: &'static str,
}

/// Responsive breakpoint thresholds, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreakPoints {
    /// Smallest phones.
    pub xxs: u32,
    /// Small phones.
    pub xs: u32,
    /// Large phones.
    pub s: u32,
    /// Small tablets.
    pub sm: u32,
    /// Tablets.
    pub m: u32,
    /// Small laptops.
    pub l: u32,
    /// Laptops.
    pub lg: u32,
    /// Desktops.
    pub xl: u32,
    /// Large desktops.
    pub xxl: u32,
    /// Very large desktops.
    pub xxxl: u32,
}

/// The theme supplied to every page through the provider composition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Namespace the design system's class names live under.
    pub namespace: &'static str,
    /// Color palette.
    pub colors: Colors,
    /// Breakpoint thresholds.
    pub break_points: BreakPoints,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            namespace: "vitrine",
            colors: Colors {
                primary: "#70ADCB",
                white: "#ffffff",
                black: "#32323C",
            },
            break_points: BreakPoints {
                xxs: 320,
                xs: 480,
                s: 640,
                sm: 768,
                m: 992,
                l: 1024,
                lg: 1200,
                xl: 1440,
                xxl: 1600,
                xxxl: 1920,
            },
        }
    }
}

/// Variables handed to the design-system configuration provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeVariables {
    /// Primary color the component library themes itself with.
    pub color_primary: &'static str,
    /// Corner radius for controls, in pixels.
    pub border_radius: u32,
}

/// Design-system configuration: the component-library prefix plus theme
/// variables. Consumed by the innermost provider of the composition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesignConfig {
    /// Class/icon prefix for the component library.
    pub prefix: String,
    /// Theme variables.
    pub variables: ThemeVariables,
}

impl Default for DesignConfig {
    fn default() -> Self {
        Self {
            prefix: "vtr".to_string(),
            variables: ThemeVariables {
                color_primary: "#70ADCB",
                border_radius: 6,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_carries_the_palette() {
        let theme = Theme::default();
        assert_eq!(theme.colors.primary, "#70ADCB");
        assert_eq!(theme.break_points.sm, 768);
    }

    #[test]
    fn design_config_prefix_matches_theme_primary() {
        let theme = Theme::default();
        let design = DesignConfig::default();
        assert_eq!(design.variables.color_primary, theme.colors.primary);
    }
}
