//! Display metadata for each classification tier.

use bicams_core::models::classification::Classification;
use bicams_core::models::locale::Locale;
use serde::Serialize;

/// 8-bit sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ClassificationBand {
    pub classification: Classification,
    /// Equivalent standard-score range (mean 100, SD 15).
    pub score_range: &'static str,
    pub percentile_range: &'static str,
    short_en: &'static str,
    long_en: &'static str,
    short_pt_br: &'static str,
    long_pt_br: &'static str,
    pub color: Rgb,
}

impl ClassificationBand {
    pub fn label(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => self.short_en,
            Locale::PtBr => self.short_pt_br,
        }
    }

    pub fn long_label(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => self.long_en,
            Locale::PtBr => self.long_pt_br,
        }
    }
}

static BANDS: [ClassificationBand; 7] = [
    ClassificationBand {
        classification: Classification::ExceptionallyLow,
        score_range: "<70",
        percentile_range: "<2",
        short_en: "Exceptionally Low",
        long_en: "Exceptionally Low Score",
        short_pt_br: "Excepcionalmente Baixa",
        long_pt_br: "Pontuação Excepcionalmente Baixa",
        color: Rgb(178, 24, 43),
    },
    ClassificationBand {
        classification: Classification::BelowAverage,
        score_range: "70-79",
        percentile_range: "2-8",
        short_en: "Below Average",
        long_en: "Below Average Score",
        short_pt_br: "Abaixo da Média",
        long_pt_br: "Pontuação Abaixo da Média",
        color: Rgb(239, 138, 98),
    },
    ClassificationBand {
        classification: Classification::LowAverage,
        score_range: "80-89",
        percentile_range: "9-24",
        short_en: "Low Average",
        long_en: "Low Average Score",
        short_pt_br: "Média Inferior",
        long_pt_br: "Pontuação Média Inferior",
        color: Rgb(253, 219, 199),
    },
    ClassificationBand {
        classification: Classification::Average,
        score_range: "90-109",
        percentile_range: "25-74",
        short_en: "Average",
        long_en: "Average Score",
        short_pt_br: "Média",
        long_pt_br: "Pontuação Média",
        color: Rgb(0, 176, 80),
    },
    ClassificationBand {
        classification: Classification::HighAverage,
        score_range: "110-119",
        percentile_range: "75-90",
        short_en: "High Average",
        long_en: "High Average Score",
        short_pt_br: "Média Superior",
        long_pt_br: "Pontuação Média Superior",
        color: Rgb(209, 229, 240),
    },
    ClassificationBand {
        classification: Classification::AboveAverage,
        score_range: "120-129",
        percentile_range: "91-97",
        short_en: "Above Average",
        long_en: "Above Average Score",
        short_pt_br: "Acima da Média",
        long_pt_br: "Pontuação Acima da Média",
        color: Rgb(103, 169, 207),
    },
    ClassificationBand {
        classification: Classification::ExceptionallyHigh,
        score_range: ">130",
        percentile_range: ">98",
        short_en: "Exceptionally High",
        long_en: "Exceptionally High Score",
        short_pt_br: "Excepcionalmente Alta",
        long_pt_br: "Pontuação Excepcionalmente Alta",
        color: Rgb(33, 102, 172),
    },
];

/// Display metadata for a tier.
pub fn band(classification: Classification) -> &'static ClassificationBand {
    // BANDS is ordered like the enum.
    &BANDS[classification as usize]
}

pub fn all_bands() -> &'static [ClassificationBand] {
    &BANDS
}
