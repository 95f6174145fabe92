use crate::config::EnvelopeConfig;

/// Outcome of the size check for a single image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Valid,
    Invalid,
}

impl Classification {
    pub fn is_valid(self) -> bool {
        matches!(self, Classification::Valid)
    }

    /// Lowercase label for logging and output folder selection.
    pub fn label(self) -> &'static str {
        match self {
            Classification::Valid => "valid",
            Classification::Invalid => "invalid",
        }
    }
}

/// Inclusive bounding box on image dimensions.
///
/// An image passes when `min_width <= width <= max_width` and
/// `min_height <= height <= max_height`. Boundary values count as valid.
#[derive(Debug, Clone, Copy)]
pub struct SizeEnvelope {
    min_width: u32,
    max_width: u32,
    min_height: u32,
    max_height: u32,
}

impl SizeEnvelope {
    pub fn new(config: &EnvelopeConfig) -> Self {
        Self {
            min_width: config.min_width,
            max_width: config.max_width,
            min_height: config.min_height,
            max_height: config.max_height,
        }
    }

    pub fn classify(&self, width: u32, height: u32) -> Classification {
        let fits = self.min_width <= width
            && width <= self.max_width
            && self.min_height <= height
            && height <= self.max_height;
        if fits {
            Classification::Valid
        } else {
            Classification::Invalid
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn envelope() -> SizeEnvelope {
        SizeEnvelope::new(&EnvelopeConfig {
            min_width: 90,
            max_width: 220,
            min_height: 60,
            max_height: 160,
        })
    }

    #[test]
    fn inside_is_valid() {
        assert_eq!(envelope().classify(100, 80), Classification::Valid);
    }

    #[test]
    fn lower_boundary_is_valid() {
        assert_eq!(envelope().classify(90, 60), Classification::Valid);
    }

    #[test]
    fn upper_boundary_is_valid() {
        assert_eq!(envelope().classify(220, 160), Classification::Valid);
    }

    #[test]
    fn one_below_min_width_is_invalid() {
        assert_eq!(envelope().classify(89, 60), Classification::Invalid);
    }

    #[test]
    fn one_above_max_height_is_invalid() {
        assert_eq!(envelope().classify(100, 161), Classification::Invalid);
    }

    #[test]
    fn both_dimensions_out_is_invalid() {
        assert_eq!(envelope().classify(50, 50), Classification::Invalid);
    }
}
