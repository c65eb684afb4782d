use aicare_ui::IconName;

#[derive(Clone, Copy, Debug)]
pub struct ImpactStat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const IMPACT_STATS: &[ImpactStat] = &[
    ImpactStat {
        value: "500+",
        label: "Healthcare Facilities",
    },
    ImpactStat {
        value: "2M+",
        label: "Patients Served",
    },
    ImpactStat {
        value: "98.7%",
        label: "Diagnostic Accuracy",
    },
    ImpactStat {
        value: "75%",
        label: "Faster Diagnosis",
    },
];

pub const HERO_STATS: &[&str] = &["99.9% Accuracy", "50K+ Patients", "24/7 Support"];

/// Words the hero headline cycles through ahead of "Reinvented."
pub const HERO_WORDS: &[&str] = &["Healthcare", "Diagnostics", "Medicine", "Treatment"];

#[derive(Clone, Copy, Debug)]
pub struct Milestone {
    pub phase: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const JOURNEY: &[Milestone] = &[
    Milestone {
        phase: "01",
        title: "Foundation",
        description: "Founded by a team of medical professionals and AI researchers at \
            MIDL, with the vision to bridge the gap between cutting-edge AI technology \
            and practical healthcare applications.",
    },
    Milestone {
        phase: "02",
        title: "First Product",
        description: "Launched Dx2D, our first AI-powered diagnostic tool for 2D \
            medical imaging, achieving breakthrough accuracy rates in radiology \
            departments across major hospitals.",
    },
    Milestone {
        phase: "03",
        title: "Global Expansion",
        description: "Expanded internationally with our complete AI healthcare suite, \
            partnering with healthcare systems across North America, Europe, and Asia \
            to improve patient outcomes globally.",
    },
];

#[derive(Clone, Copy, Debug)]
pub struct CompanyValue {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: IconName,
}

pub const COMPANY_VALUES: &[CompanyValue] = &[
    CompanyValue {
        title: "Patient First",
        description: "Every decision we make starts with the question of how it \
            improves outcomes and safety for the patient at the end of the workflow.",
        icon: IconName::Heart,
    },
    CompanyValue {
        title: "Trust & Security",
        description: "We maintain the highest standards of data security and privacy, \
            ensuring that sensitive medical information is always protected and \
            compliant.",
        icon: IconName::Shield,
    },
    CompanyValue {
        title: "Collaboration",
        description: "We believe in the power of human-AI collaboration, creating \
            tools that enhance medical expertise rather than replace human judgment.",
        icon: IconName::Users,
    },
];

#[derive(Clone, Copy, Debug)]
pub struct Office {
    pub region: &'static str,
    pub kind: &'static str,
    pub address: &'static str,
}

pub const OFFICES: &[Office] = &[
    Office {
        region: "Pakistan",
        kind: "Main Headquarters",
        address: "High End Computing Lab, Comsats University Islamabad, Islamabad",
    },
    Office {
        region: "California, USA",
        kind: "R&D Office",
        address: "San Francisco, CA",
    },
];

#[derive(Clone, Copy, Debug)]
pub struct Integration {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: IconName,
}

pub const INTEGRATIONS: &[Integration] = &[
    Integration {
        title: "EHR Systems",
        description: "Compatible with Epic, Cerner, Allscripts, and other major \
            electronic health record systems.",
        icon: IconName::Database,
    },
    Integration {
        title: "PACS Integration",
        description: "Direct integration with Picture Archiving and Communication \
            Systems for seamless imaging workflows.",
        icon: IconName::Image,
    },
    Integration {
        title: "Cloud & On-Premise",
        description: "Flexible deployment options including cloud-based, on-premise, \
            and hybrid configurations.",
        icon: IconName::Cloud,
    },
];
