use crate::{Moisture, SoilType};

/// A closed moisture band, inclusive on both ends, with its recommendation.
#[derive(Debug, Clone, Copy)]
pub struct CropBand {
    pub min: Moisture,
    pub max: Moisture,
    pub crop: &'static str,
}

impl CropBand {
    const fn new(min: Moisture, max: Moisture, crop: &'static str) -> Self {
        Self { min, max, crop }
    }

    pub fn contains(&self, moisture: Moisture) -> bool {
        self.min <= moisture && moisture <= self.max
    }
}

/// Bands for one soil type and the message used when no band matches.
#[derive(Debug)]
pub struct CropTable {
    pub bands: &'static [CropBand],
    pub out_of_range: &'static str,
}

pub const UNKNOWN_SOIL: &str = "Unknown soil type.";

// Bands are kept exactly as calibrated, including the one-unit gaps between
// neighbours (e.g. loamy 320/321).
static LOAMY: CropTable = CropTable {
    bands: &[
        CropBand::new(150.0, 320.0, "Millet (drought-resistant)"),
        CropBand::new(321.0, 380.0, "Groundnut (moderate moisture)"),
        CropBand::new(381.0, 450.0, "Watermelon (moist but not wet soil)"),
    ],
    out_of_range: "Moisture out of loamy soil ideal range (150–450).",
};

static SAND: CropTable = CropTable {
    bands: &[
        CropBand::new(450.0, 600.0, "Barley (tolerates lower moisture levels)"),
        CropBand::new(601.0, 700.0, "Wheat (requires moderate moisture)"),
        CropBand::new(701.0, 775.0, "Maize (thrives in slightly wet sandy soil)"),
        CropBand::new(776.0, 800.0, "Rice, Cotton (needs high moisture)"),
    ],
    out_of_range: "Moisture out of sandy soil ideal range (450-800).",
};

static CLAY: CropTable = CropTable {
    bands: &[
        CropBand::new(600.0, 700.0, "Paddy (high water requirement)"),
        CropBand::new(701.0, 800.0, "Sugarcane (moderately high moisture)"),
        CropBand::new(801.0, 900.0, "Jute (requires very high moisture)"),
    ],
    out_of_range: "Moisture out of clay soil ideal range (600–900).",
};

/// Returns the crop table for a soil type, or `None` for an unknown soil.
pub fn table(soil: SoilType) -> Option<&'static CropTable> {
    match soil {
        SoilType::Loamy => Some(&LOAMY),
        SoilType::Sand => Some(&SAND),
        SoilType::Clay => Some(&CLAY),
        SoilType::Unknown => None,
    }
}

/// Maps a soil type and mean moisture to a crop recommendation.
pub fn recommend_crop(soil: SoilType, moisture: Moisture) -> &'static str {
    let Some(table) = table(soil) else {
        return UNKNOWN_SOIL;
    };

    table
        .bands
        .iter()
        .find(|band| band.contains(moisture))
        .map(|band| band.crop)
        .unwrap_or(table.out_of_range)
}
