use aicare_ui::IconName;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ProductTag {
    Popular,
    New,
}

impl ProductTag {
    pub fn label(self) -> &'static str {
        match self {
            ProductTag::Popular => "Popular",
            ProductTag::New => "New",
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Product {
    pub name: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub features: [&'static str; 4],
    pub icon: IconName,
    pub tag: Option<ProductTag>,
}

pub const PRODUCTS: &[Product] = &[
    Product {
        name: "Dx2D",
        subtitle: "2D Medical Imaging Analysis",
        description: "Advanced AI-powered analysis for X-rays, CT scans, and MRI images \
            with real-time diagnostic assistance and anomaly detection.",
        features: [
            "Real-time image analysis",
            "Diagnostic suggestions",
            "Multi-format support",
            "DICOM Compatible",
        ],
        icon: IconName::Image,
        tag: Some(ProductTag::Popular),
    },
    Product {
        name: "Dx3D",
        subtitle: "3D Volumetric Imaging",
        description: "3D volumetric imaging analysis with advanced reconstruction and \
            AI-driven pathology detection for complex medical cases.",
        features: [
            "3D Reconstruction",
            "Volume Analysis",
            "Cross-sectional Views",
            "Advanced Rendering",
        ],
        icon: IconName::Box,
        tag: None,
    },
    Product {
        name: "TSS",
        subtitle: "Treatment Support System",
        description: "Treatment Support System that provides personalized treatment \
            recommendations based on patient data and medical history.",
        features: [
            "Personalized Plans",
            "Evidence-based",
            "Drug Interactions",
            "Outcome Tracking",
        ],
        icon: IconName::Pill,
        tag: Some(ProductTag::New),
    },
    Product {
        name: "MedScribe",
        subtitle: "AI Medical Transcription",
        description: "AI-powered medical transcription and documentation system that \
            converts voice notes into structured medical records.",
        features: [
            "Voice Recognition",
            "Medical Terminology",
            "Auto-formatting",
            "HIPAA Secure",
        ],
        icon: IconName::FileText,
        tag: None,
    },
    Product {
        name: "Rx Scan",
        subtitle: "Prescription Intelligence",
        description: "Prescription scanning and verification system with drug \
            interaction checking and dosage optimization.",
        features: [
            "OCR Technology",
            "Drug Database",
            "Interaction Alerts",
            "Dosage Verification",
        ],
        icon: IconName::Receipt,
        tag: None,
    },
    Product {
        name: "SearchDoc",
        subtitle: "Medical Document Search",
        description: "Intelligent medical document search and retrieval system with \
            natural language processing capabilities.",
        features: [
            "Natural Language",
            "Smart Search",
            "Document Analysis",
            "Quick Retrieval",
        ],
        icon: IconName::Search,
        tag: None,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_names_are_unique() {
        for (index, product) in PRODUCTS.iter().enumerate() {
            assert!(
                PRODUCTS[index + 1..]
                    .iter()
                    .all(|other| other.name != product.name),
                "duplicate product name: {}",
                product.name,
            );
        }
    }
}
