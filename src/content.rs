//! Fixed marketing copy rendered by the page templates.

use crate::config::SiteConfig;

pub struct NavLink {
    pub label: &'static str,
    pub anchor: &'static str,
}

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
}

pub struct Fact {
    pub label: &'static str,
    pub value: String,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink {
        label: "Services",
        anchor: "services",
    },
    NavLink {
        label: "About",
        anchor: "about",
    },
    NavLink {
        label: "Contact",
        anchor: "contact",
    },
];

pub const STATS: &[Stat] = &[
    Stat {
        value: "50+",
        label: "Projects Delivered",
    },
    Stat {
        value: "98%",
        label: "Client Satisfaction",
    },
    Stat {
        value: "24/7",
        label: "Support Available",
    },
    Stat {
        value: "5+",
        label: "Years Experience",
    },
];

pub const SERVICES: &[Service] = &[
    Service {
        icon: "brain",
        title: "AI Integration",
        description: "Seamlessly integrate AI capabilities into your existing systems and workflows. We connect your business to the latest AI technologies.",
        features: &[
            "API Integration",
            "Workflow Automation",
            "Data Pipeline Setup",
        ],
    },
    Service {
        icon: "code",
        title: "Custom AI Development",
        description: "Build bespoke AI-powered applications tailored to your unique requirements. From concept to deployment.",
        features: &["Full-Stack Development", "AI/ML Models", "Cloud Deployment"],
    },
    Service {
        icon: "message",
        title: "LLM Solutions",
        description: "Leverage large language models like GPT-4, Claude, and more to automate tasks, enhance customer service, and generate content.",
        features: &[
            "Chatbots & Assistants",
            "Content Generation",
            "Document Processing",
        ],
    },
    Service {
        icon: "zap",
        title: "Process Automation",
        description: "Identify and automate repetitive tasks using AI, saving time and reducing errors across your organization.",
        features: &[
            "Workflow Analysis",
            "RPA Integration",
            "Performance Tracking",
        ],
    },
    Service {
        icon: "shield",
        title: "AI Consulting",
        description: "Strategic guidance on AI adoption, technology selection, and implementation roadmaps for your business.",
        features: &[
            "Technology Assessment",
            "ROI Analysis",
            "Implementation Planning",
        ],
    },
    Service {
        icon: "users",
        title: "Training & Support",
        description: "Empower your team with AI knowledge through customized training programs and ongoing technical support.",
        features: &["Team Workshops", "Documentation", "24/7 Support"],
    },
];

pub const WHY_WORK_WITH_US: &[&str] = &[
    "Free initial consultation",
    "No commitment required",
    "Response within 24 hours",
    "Transparent pricing",
];

pub fn about_facts(site: &SiteConfig) -> Vec<Fact> {
    vec![
        Fact {
            label: "Founded",
            value: site.founded.to_string(),
        },
        Fact {
            label: "Location",
            value: site.location(),
        },
        Fact {
            label: "Focus",
            value: "AI & LLM Solutions".to_owned(),
        },
        Fact {
            label: "Clients",
            value: "Global".to_owned(),
        },
    ]
}
