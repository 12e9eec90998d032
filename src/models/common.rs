/// Sampling methods accepted by the Flux API. Opaque to this crate; the wire
/// identifier is passed through exactly as listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sampler {
    EulerA,
    Euler,
    Heun,
    Dpm2,
    Dpm2A,
    Lms,
}

impl Sampler {
    pub const ALL: [Sampler; 6] = [
        Sampler::EulerA,
        Sampler::Euler,
        Sampler::Heun,
        Sampler::Dpm2,
        Sampler::Dpm2A,
        Sampler::Lms,
    ];

    /// Identifier expected by the remote API.
    pub fn as_str(&self) -> &'static str {
        match self {
            Sampler::EulerA => "euler_a",
            Sampler::Euler => "euler",
            Sampler::Heun => "heun",
            Sampler::Dpm2 => "dpm_2",
            Sampler::Dpm2A => "dpm_2_a",
            Sampler::Lms => "lms",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|sampler| sampler.as_str() == value)
    }
}

/// Aspect-ratio presets offered in place of raw dimension entry. The set is
/// closed and every pair is a size the remote API supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AspectRatio {
    Square,
    Portrait,
    Landscape,
    Wide,
    Tall,
}

impl AspectRatio {
    pub const ALL: [AspectRatio; 5] = [
        AspectRatio::Square,
        AspectRatio::Portrait,
        AspectRatio::Landscape,
        AspectRatio::Wide,
        AspectRatio::Tall,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AspectRatio::Square => "Square (1:1)",
            AspectRatio::Portrait => "Portrait (3:4)",
            AspectRatio::Landscape => "Landscape (4:3)",
            AspectRatio::Wide => "Wide (16:9)",
            AspectRatio::Tall => "Tall (9:16)",
        }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            AspectRatio::Square => (1024, 1024),
            AspectRatio::Portrait => (768, 1024),
            AspectRatio::Landscape => (1024, 768),
            AspectRatio::Wide => (1024, 576),
            AspectRatio::Tall => (576, 1024),
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|preset| preset.label() == label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sampler_identifiers_round_trip() {
        for sampler in Sampler::ALL {
            assert_eq!(Sampler::parse(sampler.as_str()), Some(sampler));
        }
        assert_eq!(Sampler::parse("euler_a"), Some(Sampler::EulerA));
        assert_eq!(Sampler::parse("ddim"), None);
        assert_eq!(Sampler::parse("EULER_A"), None);
    }

    #[test]
    fn test_preset_dimensions() {
        let expected = [
            ("Square (1:1)", (1024, 1024)),
            ("Portrait (3:4)", (768, 1024)),
            ("Landscape (4:3)", (1024, 768)),
            ("Wide (16:9)", (1024, 576)),
            ("Tall (9:16)", (576, 1024)),
        ];
        for (label, dimensions) in expected {
            let preset = AspectRatio::from_label(label).expect(label);
            assert_eq!(preset.dimensions(), dimensions);
        }
        assert_eq!(AspectRatio::ALL.len(), expected.len());
    }

    #[test]
    fn test_unknown_preset_label() {
        assert_eq!(AspectRatio::from_label("Panorama (21:9)"), None);
        assert_eq!(AspectRatio::from_label(""), None);
    }
}
