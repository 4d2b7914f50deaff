pub const CENTIMETRES_PER_METRE: f64 = 100.0;
pub const CENTIMETRES_PER_FOOT: f64 = 30.48;
pub const GRAMS_PER_KILOGRAM: f64 = 100.0;
pub const KILOGRAMS_PER_POUND: f64 = 0.45359237;

/// Units a height stored in centimetres can be reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeightUnit {
    Metre,
    #[default]
    Centimetre,
    Foot,
}

impl HeightUnit {
    pub fn convert(self, centimetres: f64) -> f64 {
        match self {
            HeightUnit::Centimetre => centimetres,
            HeightUnit::Metre => centimetres / CENTIMETRES_PER_METRE,
            HeightUnit::Foot => centimetres / CENTIMETRES_PER_FOOT,
        }
    }

    /// Converts with the identity fallback used when no unit was requested.
    pub fn convert_or_default(unit: Option<Self>, centimetres: f64) -> f64 {
        unit.unwrap_or_default().convert(centimetres)
    }
}

/// Units a weight stored in kilograms can be reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WeightUnit {
    #[default]
    Kilogram,
    Gram,
    Pound,
}

impl WeightUnit {
    pub fn convert(self, kilograms: f64) -> f64 {
        match self {
            WeightUnit::Kilogram => kilograms,
            WeightUnit::Gram => kilograms * GRAMS_PER_KILOGRAM,
            WeightUnit::Pound => kilograms / KILOGRAMS_PER_POUND,
        }
    }

    pub fn convert_or_default(unit: Option<Self>, kilograms: f64) -> f64 {
        unit.unwrap_or_default().convert(kilograms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_height_conversions() {
        let h = 175.0;
        assert_eq!(HeightUnit::Centimetre.convert(h), h);
        assert_eq!(HeightUnit::Metre.convert(h), h / 100.0);
        assert_eq!(HeightUnit::Foot.convert(h), h / 30.48);
    }

    #[test]
    fn test_weight_conversions() {
        let w = 70.0;
        assert_eq!(WeightUnit::Kilogram.convert(w), w);
        assert_eq!(WeightUnit::Gram.convert(w), w * 100.0);
        assert_eq!(WeightUnit::Pound.convert(w), w / 0.45359237);
    }

    #[test]
    fn test_missing_unit_is_identity() {
        assert_eq!(HeightUnit::convert_or_default(None, 162.0), 162.0);
        assert_eq!(WeightUnit::convert_or_default(None, 50.0), 50.0);
        assert_eq!(
            HeightUnit::convert_or_default(Some(HeightUnit::Metre), 162.0),
            1.62
        );
    }
}
