//! Static portfolio content. Everything the page shows lives here; the
//! renderer only decides layout.

pub const PROFILE_EMAIL: &str = "devenbhasin4123@gmail.com";

#[derive(Debug, Clone)]
pub struct Profile {
    pub name: &'static str,
    pub headline: &'static str,
    pub location: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub linkedin_url: &'static str,
    pub github_url: &'static str,
    pub resume_url: &'static str,
    pub metrics: &'static [MetricCard],
    pub about: &'static str,
    pub strengths: &'static [(&'static str, &'static str)],
    pub experience: &'static [Experience],
    pub projects: &'static [Project],
    pub skills: &'static [SkillGroup],
    pub education: &'static [Education],
    pub certifications: &'static [CertificationGroup],
    pub interests: &'static [&'static str],
    pub footer_lines: &'static [&'static str],
}

#[derive(Debug, Clone)]
pub struct MetricCard {
    pub title: &'static str,
    pub lines: &'static [&'static str],
    pub highlight: &'static str,
}

#[derive(Debug, Clone)]
pub struct Experience {
    pub role: &'static str,
    pub period: &'static str,
    pub bullets: &'static [&'static str],
}

#[derive(Debug, Clone)]
pub struct Project {
    pub title: &'static str,
    pub tagline: &'static str,
    pub bullets: &'static [&'static str],
    pub link: &'static str,
    pub link_label: &'static str,
    pub tags: &'static [&'static str],
}

#[derive(Debug, Clone)]
pub struct SkillGroup {
    pub title: &'static str,
    pub skills: &'static [&'static str],
}

#[derive(Debug, Clone)]
pub struct Education {
    pub degree: &'static str,
    pub field: &'static str,
    pub institution: &'static str,
    pub period: &'static str,
    pub grade: &'static str,
}

#[derive(Debug, Clone)]
pub struct CertificationGroup {
    pub title: &'static str,
    pub items: &'static [&'static str],
}

pub fn default_profile() -> Profile {
    Profile {
        name: "Deven Bhasin",
        headline: "AI/Software/Cloud Engineer",
        location: "Brisbane, QLD, Australia",
        phone: "+61 0412711759",
        email: PROFILE_EMAIL,
        linkedin_url: "https://www.linkedin.com/in/devenbhasin/",
        github_url: "https://github.com/dbhasin4123",
        resume_url: "https://drive.google.com/file/d/1f07tZ_zD3VcSpMkuMj2zW69mTJgOahxE/view?usp=sharing",
        metrics: METRICS,
        about: "Curious and adaptable software developer passionate about building reliable, \
                efficient, and user-centric applications. Enthusiastic about AI, programming \
                languages, and system design, with a mindset geared toward lifelong learning \
                and impactful problem-solving.",
        strengths: STRENGTHS,
        experience: EXPERIENCE,
        projects: PROJECTS,
        skills: SKILLS,
        education: EDUCATION,
        certifications: CERTIFICATIONS,
        interests: &[
            "Full-time Software Engineering roles",
            "AI/ML Research positions",
            "Cloud Engineering opportunities",
            "Collaboration on open source projects",
            "Technical discussions and mentorship",
        ],
        footer_lines: &[
            "🚀 Passionate about AI, Software Engineering, and Cloud Computing",
            "📧 Always open to new opportunities and collaborations",
        ],
    }
}

const METRICS: &[MetricCard] = &[
    MetricCard {
        title: "🎓 Education",
        lines: &["Software Engineering (Hons)", "University of Queensland"],
        highlight: "GPA: 5.5/7",
    },
    MetricCard {
        title: "💼 Experience",
        lines: &["Research Student at CSIRO", "Data Analyst Intern"],
        highlight: "93% Model Accuracy",
    },
    MetricCard {
        title: "🚀 Projects",
        lines: &["8+ Major Projects", "AI/ML & Full-Stack"],
        highlight: "30% Efficiency Gains",
    },
];

const STRENGTHS: &[(&str, &str)] = &[
    (
        "🤖 AI/ML Expertise",
        "Developed models achieving 93% mean IoU, specializing in computer vision and NLP",
    ),
    (
        "☁️ Cloud Architecture",
        "AWS certified with hands-on experience in scalable system design",
    ),
    (
        "🔧 Full-Stack Development",
        "Built applications from Chrome extensions to mobile apps",
    ),
    (
        "📊 Data-Driven Solutions",
        "Automated workflows increasing efficiency by 30%",
    ),
    (
        "🌍 Languages",
        "English (Fluent), Hindi (Native), Punjabi (Native)",
    ),
];

const EXPERIENCE: &[Experience] = &[
    Experience {
        role: "🔬 Research Student - CSIRO",
        period: "Nov 2024 – Feb 2025",
        bullets: &[
            "Developed image segmentation models to quantify blackleg disease in canola",
            "Implemented UNet, ResUNet, and SegFormer architectures achieving 93% mean IoU",
            "Applied ViT and EfficientNet for disease quantification with expert correlation",
        ],
    },
    Experience {
        role: "📊 Data Analyst Intern - FutureXEnergy",
        period: "Sep 2023 – Dec 2023",
        bullets: &[
            "Automated Excel workflows using Python, increasing efficiency by 30%",
            "Created interactive dashboards for energy consumption analysis",
            "Built data validation tools ensuring downstream analysis integrity",
        ],
    },
];

const PROJECTS: &[Project] = &[
    Project {
        title: "🛒 Later - Chrome Extension",
        tagline: "Full-Stack Wishlist Application",
        bullets: &[
            "Full-stack app (Python API, Node.js frontend, Chrome Extension) on AWS",
            "Layered Architecture for maintainability and rapid development",
            "Load tested with k6 for 50 concurrent users",
            "Web-scraping service for 8+ e-commerce sites",
        ],
        link: "https://github.com/dbhasin4123",
        link_label: "🔗 View Project",
        tags: &["Python", "Node.js", "AWS", "Docker", "PostgreSQL"],
    },
    Project {
        title: "📰 News Summarizer",
        tagline: "AI-Powered News Analysis",
        bullets: &[
            "Streamlit interface with personalized article delivery",
            "Llama LLM integration for AI-powered summaries",
            "Smart filtering by interests, location, and time range",
            "NLTK preprocessing for enhanced text analysis",
        ],
        link: "https://github.com/dbhasin4123/news-summarizer",
        link_label: "🔗 View Project",
        tags: &["Python", "Llama 3.2", "Streamlit", "OpenAI"],
    },
    Project {
        title: "🤖 AI Recruiter Platform",
        tagline: "Automated Recruitment System",
        bullets: &[
            "AI agents for resume analysis and candidate screening",
            "PDF data extraction with confidence scoring",
            "Intelligent job-to-candidate matching",
            "OpenAI GPT integration for advanced analysis",
        ],
        link: "https://github.com/dbhasin4123/ai-recruiter",
        link_label: "🔗 View Project",
        tags: &["Python", "OpenAI", "Streamlit", "PDF Processing"],
    },
    Project {
        title: "📄 Doc Assistant",
        tagline: "RAG-based Document AI",
        bullets: &[
            "Local AI assistant using RAG pipeline",
            "Offline document conversations",
            "ChromaDB for semantic search",
            "LangChain integration for advanced NLP",
        ],
        link: "https://github.com/dbhasin4123/doc-assistant",
        link_label: "🔗 View Project",
        tags: &["Python", "LangChain", "ChromaDB", "RAG"],
    },
    Project {
        title: "🌐 Translatify",
        tagline: "Real-time Translation App",
        bullets: &[
            "React Native app for elderly immigrants",
            "Real-time translation with WebSocket",
            "Accessibility-focused design",
            "Multi-language support",
        ],
        link: "https://github.com/dbhasin4123/Elderly-Immigrant-Integration",
        link_label: "🔗 View Project",
        tags: &["React Native", "Node.js", "WebSocket", "Translation APIs"],
    },
    Project {
        title: "🏥 Medical Image Segmentation",
        tagline: "Enhanced U-Net Model",
        bullets: &[
            "Skin lesion segmentation from ISIC 2018 dataset",
            "Enhanced U-Net architecture in TensorFlow",
            "Achieved 90% Dice coefficient",
            "Medical AI with high precision requirements",
        ],
        link: "https://github.com/dbhasin4123/PatternAnalysis-2023/tree/topic-recognition/recognition/Improved%20UNet%20Model%20ISIC-48241328",
        link_label: "🔗 View Project",
        tags: &["TensorFlow", "Medical AI", "Computer Vision"],
    },
    Project {
        title: "🌦️ Weather-Energy Correlation",
        tagline: "Research & Thesis Project",
        bullets: &[
            "Predictive models for NEM Australia",
            "Weather uncertainty and energy dispatch analysis",
            "Spatio-temporal correlation studies",
        ],
        link: "https://github.com/dbhasin4123/REIT4842_Thesis",
        link_label: "🔗 View Research",
        tags: &["Python", "Machine Learning", "Statistical Analysis"],
    },
    Project {
        title: "🏭 IoT Blockchain Monitoring",
        tagline: "Production Quality Control",
        bullets: &[
            "End-to-end IoT system with C firmware",
            "nRF52 and STM32 platforms with Zephyr RTOS",
            "Proof-of-Work blockchain for data integrity",
        ],
        link: "https://github.com/dbhasin4123/Blockchain-Embedded-system",
        link_label: "🔗 View Project",
        tags: &["C", "Zephyr RTOS", "Blockchain", "IoT"],
    },
];

const SKILLS: &[SkillGroup] = &[
    SkillGroup {
        title: "🤖 AI/ML & Data Science",
        skills: &[
            "TensorFlow",
            "PyTorch",
            "Scikit-Learn",
            "LangChain",
            "RAG",
            "OpenAI",
            "Ollama",
            "NumPy",
            "Pandas",
            "Matplotlib",
        ],
    },
    SkillGroup {
        title: "💻 Programming Languages",
        skills: &[
            "Python", "JavaScript", "C/C++", "Java", "Dart", "HTML/CSS", "R", "MATLAB",
        ],
    },
    SkillGroup {
        title: "🗄️ Databases",
        skills: &["MySQL", "PostgreSQL", "SQLite3", "ChromaDB"],
    },
    SkillGroup {
        title: "☁️ Cloud & DevOps",
        skills: &["AWS", "Docker", "Kubernetes", "Terraform", "Git", "GitHub"],
    },
    SkillGroup {
        title: "🌐 Web & Mobile Development",
        skills: &[
            "React",
            "React Native",
            "Flutter",
            "Streamlit",
            "Flask",
            "Express.js",
            "Node.js",
        ],
    },
    SkillGroup {
        title: "🛠️ Tools & Environment",
        skills: &[
            "VS Code",
            "Google Colab",
            "Linux",
            "Windows",
            "WSL",
            "Poetry",
        ],
    },
];

const EDUCATION: &[Education] = &[
    Education {
        degree: "🎓 Bachelor of Engineering (Hons)",
        field: "Software Engineering w/ Computer Engineering",
        institution: "University of Queensland, Australia",
        period: "July 2023 - July 2025",
        grade: "GPA: 5.5/7",
    },
    Education {
        degree: "🎓 Bachelor of Engineering",
        field: "Computer Engineering",
        institution: "TIET, Patiala, India",
        period: "Sep 2021 - June 2023",
        grade: "CGPA: 8/10",
    },
    Education {
        degree: "🏫 12th Standard",
        field: "Maths, Physics, Chemistry",
        institution: "GPS, Punjab, India",
        period: "Completed: June 2021",
        grade: "94.6%",
    },
];

const CERTIFICATIONS: &[CertificationGroup] = &[
    CertificationGroup {
        title: "AWS Certifications",
        items: &[
            "AWS Cloud Foundations",
            "AWS Cloud Architecting",
            "AWS Cloud Developing",
        ],
    },
    CertificationGroup {
        title: "Research & Academic",
        items: &["CSIRO Studentship", "Global Connect Scholarship (2023)"],
    },
    CertificationGroup {
        title: "Technical Certifications",
        items: &[
            "Google Python Courses (2x)",
            "Computer Vision Applications (TIET)",
            "Mobile App Development (TIET)",
            "Robotic Arm Development (TIET)",
            "Handwritten Text Recognition (TIET)",
        ],
    },
];
