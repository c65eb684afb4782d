#[derive(Clone, Copy, Debug)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct FaqCategory {
    pub title: &'static str,
    pub entries: &'static [FaqEntry],
}

pub const FAQ_CATEGORIES: &[FaqCategory] = &[
    FaqCategory {
        title: "AI-Care (General & Company)",
        entries: &[
            FaqEntry {
                question: "What is AI-Care's core mission?",
                answer: "AI-Care's mission is to leverage cutting-edge artificial \
                    intelligence to develop solutions that enhance the accuracy, \
                    efficiency, and accessibility of medical imaging diagnostics and \
                    documentation.",
            },
            FaqEntry {
                question: "Who is AI-Care affiliated with?",
                answer: "AI-Care operates under the umbrella of the Medical Imaging and \
                    Data Analytics Lab (MIDL) and the National Center of Artificial \
                    Intelligence (NCAI) at Comsats University Islamabad.",
            },
            FaqEntry {
                question: "What is AI-Care's main specialization?",
                answer: "Our specialization is in creating AI-driven medical imaging \
                    solutions and data solutions for documentation and communication \
                    that integrate seamlessly into existing medical workflows.",
            },
            FaqEntry {
                question: "How quickly can we implement AI Care solutions?",
                answer: "Implementation typically takes 2-4 weeks depending on your \
                    existing infrastructure and the specific products you choose. Our \
                    team provides full support throughout the process.",
            },
            FaqEntry {
                question: "Is AI Care HIPAA compliant?",
                answer: "Yes, all AI Care products are fully HIPAA compliant and meet \
                    the highest standards for medical data security and privacy \
                    protection.",
            },
            FaqEntry {
                question: "Do you offer training for our staff?",
                answer: "Absolutely! We provide comprehensive training programs, \
                    documentation, and ongoing support to ensure your team can \
                    effectively use our AI solutions.",
            },
        ],
    },
    FaqCategory {
        title: "Dx2D (2D Radiology DICOM Viewer)",
        entries: &[
            FaqEntry {
                question: "What is the primary function of Dx2D?",
                answer: "Dx2D is an AI-powered DICOM viewer designed specifically for \
                    the viewing and analysis of 2D radiology imaging.",
            },
            FaqEntry {
                question: "Which medical imaging modalities does Dx2D support?",
                answer: "Dx2D supports 2D modalities such as X-ray, Mammography, and \
                    Fluoroscopy.",
            },
            FaqEntry {
                question: "How does Dx2D improve a radiologist's workflow?",
                answer: "It enhances workflows through intelligent tools, automated \
                    measurements, seamless PACS integration, and an integrated report \
                    generation module for faster reporting and reduced errors.",
            },
            FaqEntry {
                question: "Does Dx2D offer features for radiology learning?",
                answer: "Yes, users can type in anatomical terms, and the system will \
                    automatically highlight the corresponding structures on the X-ray \
                    image for training and learning purposes.",
            },
        ],
    },
    FaqCategory {
        title: "Dx3D (3D Radiology DICOM Viewer)",
        entries: &[
            FaqEntry {
                question: "What is Dx3D and what modalities does it support?",
                answer: "Dx3D is an AI-powered DICOM viewer for 3D radiology imaging, \
                    supporting modalities such as CT, MRI, and Ultrasound.",
            },
            FaqEntry {
                question: "What advanced 3D visualization tools are included in Dx3D?",
                answer: "It offers the ability for 3D model reconstruction from images \
                    and advanced 3D tools like Multi-Planar Reconstruction (MPR).",
            },
            FaqEntry {
                question: "Does Dx3D have a feature for 3D anatomy learning?",
                answer: "Yes, similar to Dx2D, it allows users to type anatomical terms \
                    to automatically highlight the corresponding structures on the 3D \
                    images for enhanced learning.",
            },
        ],
    },
    FaqCategory {
        title: "TSS (Tuberculosis Screening System)",
        entries: &[
            FaqEntry {
                question: "What is the main purpose of the TSS product?",
                answer: "TSS (Tuberculosis Screening System) is an AI-powered system \
                    dedicated to the efficient and accurate screening and diagnosis of \
                    tuberculosis from X-ray images.",
            },
            FaqEntry {
                question: "How accurate is the TSS system?",
                answer: "The system achieves a remarkable 98% accuracy worldwide. It \
                    has been recognized as a top performer in competitions since 2021 \
                    and was validated on a local Pakistani dataset of 10,000 samples.",
            },
            FaqEntry {
                question: "What are the key automation features of TSS?",
                answer: "Key features include auto-detection of TB-related anomalies, \
                    automated impression generation for reports, and a voice control \
                    feature for hands-free interaction.",
            },
        ],
    },
    FaqCategory {
        title: "MSS / Tahkhees (Mammography Screening System)",
        entries: &[
            FaqEntry {
                question: "What is the function of the MSS / Tahkhees system?",
                answer: "MSS (Mammography Screening System), also referred to as \
                    Tahkhees, is an AI-powered system designed for mammography \
                    screening that accurately predicts tumors and assesses mammography \
                    density.",
            },
            FaqEntry {
                question: "What is the reported accuracy of the MSS product?",
                answer: "MSS achieves an exceptional 98% accuracy worldwide. It has \
                    been a top performer in competitions since 2021 and was rigorously \
                    validated on a Pakistani local dataset of 8,000 samples.",
            },
        ],
    },
    FaqCategory {
        title: "Medscribe (Medical Documentation App)",
        entries: &[
            FaqEntry {
                question: "What is Medscribe?",
                answer: "Medscribe is an innovative mobile and web application that \
                    uses AI to accurately transcribe medical communications and \
                    intelligently format them into structured reports.",
            },
            FaqEntry {
                question: "What types of communication does Medscribe transcribe?",
                answer: "It transcribes various interactions, including doctor-patient \
                    consultations, radiologist notes, surgeon operation notes, \
                    nurse-patient monitoring, and triage officer communication.",
            },
            FaqEntry {
                question: "Does Medscribe support regional languages/dialects?",
                answer: "Yes, Medscribe has multi-dialect support for regional \
                    languages including Urdu, Punjabi, Sindhi, and Pashto, with a high \
                    95% transcription accuracy.",
            },
        ],
    },
    FaqCategory {
        title: "RxScan (Prescription Management App)",
        entries: &[
            FaqEntry {
                question: "What is RxScan for?",
                answer: "RxScan is a mobile and web application that helps individuals \
                    securely scan their prescriptions and understand them using an \
                    advanced AI assistant.",
            },
            FaqEntry {
                question: "What kind of information does the RxScan AI provide to the user?",
                answer: "The AI provides clear, concise information about the \
                    medication, including side effects, duration of treatment, dosage, \
                    and potential drug interaction alerts, all through an intuitive \
                    chat interface.",
            },
            FaqEntry {
                question: "What are the benefits of using RxScan as a patient?",
                answer: "Benefits include improved medication safety, better adherence \
                    to doctor's instructions, secure digital storage of all \
                    prescriptions, and overall peace of mind.",
            },
        ],
    },
];
