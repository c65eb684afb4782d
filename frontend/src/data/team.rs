use aicare_ui::IconName;

#[derive(Clone, Copy, Debug)]
pub struct Leader {
    pub name: &'static str,
    pub role: &'static str,
    pub bio: &'static str,
    pub education: &'static str,
    pub specialties: &'static [&'static str],
}

pub const LEADERSHIP: &[Leader] = &[
    Leader {
        name: "Dr. Sarah Chen",
        role: "Chief Executive Officer",
        bio: "Former Director of AI Research at Johns Hopkins Medical Center with 15+ \
            years in medical AI development.",
        education: "MD, PhD - Stanford University",
        specialties: &["Medical AI", "Healthcare Innovation", "Strategic Leadership"],
    },
    Leader {
        name: "Dr. Michael Rodriguez",
        role: "Chief Technology Officer",
        bio: "AI researcher and former Google Health engineer specializing in computer \
            vision and medical imaging algorithms.",
        education: "PhD Computer Science - MIT",
        specialties: &["Computer Vision", "Machine Learning", "Medical Imaging"],
    },
    Leader {
        name: "Dr. Emily Watson",
        role: "Chief Medical Officer",
        bio: "Board-certified radiologist with expertise in diagnostic imaging and 20+ \
            years of clinical experience.",
        education: "MD - Harvard Medical School",
        specialties: &["Radiology", "Diagnostic Imaging", "Clinical Practice"],
    },
    Leader {
        name: "David Kim",
        role: "Chief Operating Officer",
        bio: "Healthcare operations expert with extensive experience scaling medical \
            technology companies globally.",
        education: "MBA - Wharton School",
        specialties: &["Operations Management", "Healthcare Systems", "Global Expansion"],
    },
];

#[derive(Clone, Copy, Debug)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub department: &'static str,
}

pub const TEAM_MEMBERS: &[TeamMember] = &[
    TeamMember {
        name: "Dr. James Liu",
        role: "Senior AI Research Scientist",
        department: "Research & Development",
    },
    TeamMember {
        name: "Dr. Maria Gonzalez",
        role: "Lead Clinical Data Scientist",
        department: "Clinical Affairs",
    },
    TeamMember {
        name: "Alex Thompson",
        role: "Senior Software Engineer",
        department: "Engineering",
    },
    TeamMember {
        name: "Dr. Priya Patel",
        role: "Clinical Integration Specialist",
        department: "Clinical Affairs",
    },
    TeamMember {
        name: "Robert Johnson",
        role: "VP of Product Management",
        department: "Product",
    },
    TeamMember {
        name: "Dr. Lisa Zhang",
        role: "Head of Quality Assurance",
        department: "Quality & Compliance",
    },
];

#[derive(Clone, Copy, Debug)]
pub struct Advisor {
    pub name: &'static str,
    pub role: &'static str,
    pub affiliation: &'static str,
}

pub const ADVISORS: &[Advisor] = &[
    Advisor {
        name: "Dr. Richard Sterling",
        role: "Medical Advisory Board Chair",
        affiliation: "Former Chief of Radiology, Mayo Clinic",
    },
    Advisor {
        name: "Prof. Angela Martinez",
        role: "AI Ethics Advisor",
        affiliation: "Stanford AI Ethics Institute",
    },
    Advisor {
        name: "Dr. Thomas Anderson",
        role: "Regulatory Affairs Advisor",
        affiliation: "Former FDA Medical Device Director",
    },
];

#[derive(Clone, Copy, Debug)]
pub struct CultureValue {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: IconName,
}

pub const CULTURE_VALUES: &[CultureValue] = &[
    CultureValue {
        title: "Innovation",
        description: "We embrace curiosity and risk-taking to push the boundaries of \
            healthcare AI.",
        icon: IconName::Lightbulb,
    },
    CultureValue {
        title: "Collaboration",
        description: "Success is a team effort built on mutual respect and shared goals \
            across disciplines.",
        icon: IconName::Users,
    },
    CultureValue {
        title: "Continuous Learning",
        description: "The pace of AI demands constant education and professional \
            development.",
        icon: IconName::BookOpen,
    },
    CultureValue {
        title: "Patient Focus",
        description: "Our ultimate purpose is to build tools that genuinely improve \
            patient care and safety.",
        icon: IconName::Heart,
    },
];

/// Short leadership preview rendered on the intro page.
#[derive(Clone, Copy, Debug)]
pub struct IntroTeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub affiliation: &'static str,
}

pub const INTRO_TEAM: &[IntroTeamMember] = &[
    IntroTeamMember {
        name: "Dr. Evelyn Reed",
        role: "AI Ethics",
        affiliation: "Stanford School of Medicine",
    },
    IntroTeamMember {
        name: "Prof. Ben Carter",
        role: "Data Science Lead",
        affiliation: "MIT Department of CS",
    },
    IntroTeamMember {
        name: "Dr. Lena Khan",
        role: "Clinical Integration",
        affiliation: "Global Health Systems Inc.",
    },
];
