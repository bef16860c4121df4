/// AQI category registry for the AirNow client.
///
/// Defines the fixed color table used to decorate upstream categories, and
/// the EPA AQI bands those colors stand for. This is the single source of
/// truth for category colors; other modules go through `category_color`
/// rather than indexing the table themselves.

use crate::model::Rgba;

// ---------------------------------------------------------------------------
// Color table
// ---------------------------------------------------------------------------

/// Index of the "unknown" sentinel in `CATEGORY_COLORS`.
pub const UNKNOWN_CATEGORY: usize = 6;

/// Display colors, indexed by the category code as reported upstream.
///
/// The last entry is the black sentinel for any code outside the six
/// defined categories.
pub static CATEGORY_COLORS: [Rgba; 7] = [
    Rgba::new(0, 228, 0, 0),   // Green, Good
    Rgba::new(255, 255, 0, 0), // Yellow, Moderate
    Rgba::new(255, 126, 0, 0), // Orange, Unhealthy for Sensitive Groups
    Rgba::new(255, 0, 0, 0),   // Red, Unhealthy
    Rgba::new(153, 0, 76, 0),  // Purple, Very Unhealthy
    Rgba::new(76, 0, 38, 0),   // Maroon, Hazardous
    Rgba::new(0, 0, 0, 0),     // Black, unknown
];

/// Color for a category code. Codes outside 0..=5 get the unknown sentinel.
pub fn category_color(code: i32) -> Rgba {
    usize::try_from(code)
        .ok()
        .filter(|&i| i < UNKNOWN_CATEGORY)
        .and_then(|i| CATEGORY_COLORS.get(i))
        .copied()
        .unwrap_or(CATEGORY_COLORS[UNKNOWN_CATEGORY])
}

// ---------------------------------------------------------------------------
// Category metadata
// ---------------------------------------------------------------------------

/// One EPA AQI band.
pub struct CategoryInfo {
    /// Position in `CATEGORY_COLORS`.
    pub index: usize,
    pub name: &'static str,
    /// Inclusive AQI range covered by this band.
    pub aqi_min: i32,
    pub aqi_max: i32,
}

/// The six defined AQI bands, in ascending order of severity.
///
/// Source: EPA Technical Assistance Document for the Reporting of Daily
/// Air Quality (airnow.gov/aqi/aqi-basics).
pub static CATEGORY_REGISTRY: &[CategoryInfo] = &[
    CategoryInfo { index: 0, name: "Good", aqi_min: 0, aqi_max: 50 },
    CategoryInfo { index: 1, name: "Moderate", aqi_min: 51, aqi_max: 100 },
    CategoryInfo {
        index: 2,
        name: "Unhealthy for Sensitive Groups",
        aqi_min: 101,
        aqi_max: 150,
    },
    CategoryInfo { index: 3, name: "Unhealthy", aqi_min: 151, aqi_max: 200 },
    CategoryInfo { index: 4, name: "Very Unhealthy", aqi_min: 201, aqi_max: 300 },
    CategoryInfo { index: 5, name: "Hazardous", aqi_min: 301, aqi_max: 500 },
];

/// Band a numeric AQI falls into, or `None` for negative or >500 values.
pub fn category_for_aqi(aqi: i32) -> Option<&'static CategoryInfo> {
    CATEGORY_REGISTRY
        .iter()
        .find(|c| (c.aqi_min..=c.aqi_max).contains(&aqi))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defined_codes_map_to_their_table_entry() {
        for code in 0..=5 {
            assert_eq!(category_color(code), CATEGORY_COLORS[code as usize]);
        }
    }

    #[test]
    fn out_of_range_codes_map_to_unknown() {
        let unknown = Rgba::new(0, 0, 0, 0);
        for code in [6, 7, 99, -1, i32::MIN, i32::MAX] {
            assert_eq!(category_color(code), unknown, "code {}", code);
        }
    }

    #[test]
    fn registry_indices_match_color_table_positions() {
        for (i, info) in CATEGORY_REGISTRY.iter().enumerate() {
            assert_eq!(info.index, i);
            assert!(info.index < UNKNOWN_CATEGORY);
        }
    }

    #[test]
    fn registry_bands_are_contiguous() {
        for pair in CATEGORY_REGISTRY.windows(2) {
            assert_eq!(pair[0].aqi_max + 1, pair[1].aqi_min, "gap after {}", pair[0].name);
        }
    }

    #[test]
    fn aqi_lookup_at_band_edges() {
        assert_eq!(category_for_aqi(0).map(|c| c.name), Some("Good"));
        assert_eq!(category_for_aqi(50).map(|c| c.name), Some("Good"));
        assert_eq!(category_for_aqi(51).map(|c| c.name), Some("Moderate"));
        assert_eq!(category_for_aqi(150).map(|c| c.index), Some(2));
        assert_eq!(category_for_aqi(500).map(|c| c.name), Some("Hazardous"));
        assert!(category_for_aqi(501).is_none());
        assert!(category_for_aqi(-1).is_none());
    }
}
