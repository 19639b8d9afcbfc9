//! Color schemes and multi-stop interpolation engine.

/// RGB color as (r, g, b) with values in 0..=255.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A color stop: position in [0, 1] mapped to an RGB color.
#[derive(Debug, Clone, Copy)]
pub struct ColorStop {
    pub t: f64,
    pub color: Rgb,
}

impl ColorStop {
    pub const fn new(t: f64, r: u8, g: u8, b: u8) -> Self {
        Self {
            t,
            color: Rgb::new(r, g, b),
        }
    }
}

/// Available color schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorScheme {
    /// Black -> White
    Grayscale,
    /// Green -> Yellow (general-purpose value fields)
    Summer,
    /// Black -> Red -> Yellow -> White (density-like data)
    Heat,
    /// Blue -> White -> Red (divergent data)
    Divergent,
}

impl ColorScheme {
    /// All available schemes, useful for CLI help and validation.
    pub const ALL: &'static [ColorScheme] = &[
        Self::Grayscale,
        Self::Summer,
        Self::Heat,
        Self::Divergent,
    ];

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Grayscale => "Grayscale",
            Self::Summer => "Summer",
            Self::Heat => "Heat",
            Self::Divergent => "Divergent",
        }
    }
}

// ─── Color stop definitions ────────────────────────────────────────────

const SUMMER_STOPS: &[ColorStop] = &[
    ColorStop::new(0.0, 0, 128, 102),
    ColorStop::new(1.0, 255, 255, 102),
];

const HEAT_STOPS: &[ColorStop] = &[
    ColorStop::new(0.00, 0, 0, 0),
    ColorStop::new(0.36, 230, 0, 0),
    ColorStop::new(0.75, 255, 210, 0),
    ColorStop::new(1.00, 255, 255, 255),
];

const DIVERGENT_STOPS: &[ColorStop] = &[
    ColorStop::new(0.00, 44, 62, 180),
    ColorStop::new(0.25, 120, 160, 220),
    ColorStop::new(0.50, 240, 240, 240),
    ColorStop::new(0.75, 220, 120, 80),
    ColorStop::new(1.00, 180, 30, 30),
];

// ─── Interpolation engine ──────────────────────────────────────────────

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

fn lerp_color(c1: Rgb, c2: Rgb, t: f64) -> Rgb {
    Rgb::new(
        lerp(c1.r as f64, c2.r as f64, t).round() as u8,
        lerp(c1.g as f64, c2.g as f64, t).round() as u8,
        lerp(c1.b as f64, c2.b as f64, t).round() as u8,
    )
}

fn multi_stop(stops: &[ColorStop], t: f64) -> Rgb {
    if t <= 0.0 {
        return stops[0].color;
    }
    if t >= 1.0 {
        return stops[stops.len() - 1].color;
    }
    for i in 1..stops.len() {
        if t <= stops[i].t {
            let ratio = (t - stops[i - 1].t) / (stops[i].t - stops[i - 1].t);
            return lerp_color(stops[i - 1].color, stops[i].color, ratio);
        }
    }
    stops[stops.len() - 1].color
}

/// Evaluate a color scheme at normalized position `t` ∈ [0, 1].
///
/// Positions outside the range clamp to the end colors.
pub fn evaluate(scheme: ColorScheme, t: f64) -> Rgb {
    match scheme {
        ColorScheme::Grayscale => {
            let v = (t.clamp(0.0, 1.0) * 255.0).round() as u8;
            Rgb::new(v, v, v)
        }
        ColorScheme::Summer => multi_stop(SUMMER_STOPS, t),
        ColorScheme::Heat => multi_stop(HEAT_STOPS, t),
        ColorScheme::Divergent => multi_stop(DIVERGENT_STOPS, t),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grayscale_midpoint() {
        let c = evaluate(ColorScheme::Grayscale, 0.5);
        assert_eq!(c, Rgb::new(128, 128, 128));
    }

    #[test]
    fn summer_endpoints() {
        assert_eq!(evaluate(ColorScheme::Summer, 0.0), Rgb::new(0, 128, 102));
        assert_eq!(evaluate(ColorScheme::Summer, 1.0), Rgb::new(255, 255, 102));
    }

    #[test]
    fn summer_blue_channel_is_constant() {
        for i in 0..=10 {
            let c = evaluate(ColorScheme::Summer, i as f64 / 10.0);
            assert_eq!(c.b, 102);
        }
    }

    #[test]
    fn heat_endpoints() {
        assert_eq!(evaluate(ColorScheme::Heat, 0.0), Rgb::new(0, 0, 0));
        assert_eq!(evaluate(ColorScheme::Heat, 1.0), Rgb::new(255, 255, 255));
    }

    #[test]
    fn divergent_midpoint_is_neutral() {
        let c = evaluate(ColorScheme::Divergent, 0.5);
        assert_eq!(c, Rgb::new(240, 240, 240));
    }

    #[test]
    fn clamping_below_zero() {
        let c = evaluate(ColorScheme::Divergent, -0.5);
        assert_eq!(c, Rgb::new(44, 62, 180));
    }

    #[test]
    fn clamping_above_one() {
        let c = evaluate(ColorScheme::Divergent, 1.5);
        assert_eq!(c, Rgb::new(180, 30, 30));
    }

    #[test]
    fn all_schemes_evaluate_midpoint() {
        assert_eq!(ColorScheme::ALL.len(), 4);
        for &scheme in ColorScheme::ALL {
            evaluate(scheme, 0.5);
            assert!(!scheme.name().is_empty());
        }
    }
}
