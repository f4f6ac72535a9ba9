//! Seeded page content.
//!
//! Static data only; the sections render it and the filter/toggle logic
//! selects from it.

use crate::gallery::Category;

/// Resume document served from the asset root
pub const RESUME_PATH: &str = "/Bilal_Mahmood_Resume_x.pdf";

/// Contribution graph image shown in the hero
pub const CONTRIBUTION_GRAPH_PATH: &str = "/gitcontribution.png";

pub const OWNER_NAME: &str = "Bilal Mahmood";
pub const OWNER_TITLE: &[&str] = &["Head of AI/ML @ Moara.io", "&", "Full Stack Engineer"];
pub const OWNER_LOCATION: &str = "Austin, TX";

#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub category: Category,
    pub icon: &'static str,
    pub background: &'static str,
    pub repo_url: &'static str,
    pub featured: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimelineEntry {
    pub period: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Highlighted trailing sentence, rendered with emphasis
    pub highlight: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Skill {
    pub name: &'static str,
    level: u8,
}

impl Skill {
    /// Proficiency in percent, clamped to 100.
    pub const fn new(name: &'static str, level: u8) -> Self {
        Self {
            name,
            level: if level > 100 { 100 } else { level },
        }
    }

    pub fn level(&self) -> u8 {
        self.level
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkillCategory {
    pub title: &'static str,
    pub icon: &'static str,
    pub skills: &'static [Skill],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    GitHub,
    LinkedIn,
    Email,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContactLink {
    pub kind: LinkKind,
    pub label: &'static str,
    pub display: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

impl ContactLink {
    /// Whether the link opens a new browsing context.
    pub fn opens_externally(&self) -> bool {
        !matches!(self.kind, LinkKind::Email)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const ABOUT_PARAGRAPHS: &[&str] = &[
    "I'm the Head of AI/ML at Moara.io and Full Stack Engineer by trade with a strong foundation in computer science and a passion for building scalable AI solutions and enterprise applications. My journey in tech began with curiosity about how things work, and it has evolved into a leadership role in AI/ML, specializing in computer vision, LLMs, and full-stack development.",
    "I believe in writing clean, maintainable code and staying at the forefront of AI/ML technologies. When I'm not coding, you'll find me fine-tuning transformer models, contributing to open-source projects, or sharing knowledge with the developer community.",
];

pub const STATS: &[Stat] = &[
    Stat { value: "5+", label: "Years Experience" },
    Stat { value: "100+", label: "Projects Completed" },
];

pub static PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "GhostCoder V2",
        description: "An AI coding assistant that connects to local Ollama servers to generate actual code and modify files directly. Unlike other AI assistants that just explain things, GhostCoder is designed to write, modify, and understand code with agentic behavior.",
        tech: &["Python", "Ollama", "AI/ML", "CLI", "Code Generation", "File Processing"],
        category: Category::AiMl,
        icon: "\u{1F47B}",
        background: "linear-gradient(135deg, #667eea 0%, #764ba2 100%)",
        repo_url: "https://github.com/GhostInTheToast/GhostCoderV2",
        featured: true,
    },
    Project {
        id: 2,
        title: "GhostTech Port Scanner",
        description: "A fast multithreaded TCP port scanner written in Python. Scans targets for open ports, grabs service banners, and exports results in JSON/CSV formats. Features threaded scanning, custom port ranges, and banner grabbing for HTTP/HTTPS services.",
        tech: &["Python", "Networking", "Multithreading", "TCP/IP", "Security", "JSON/CSV Export"],
        category: Category::Backend,
        icon: "\u{1F50D}",
        background: "linear-gradient(135deg, #f093fb 0%, #f5576c 100%)",
        repo_url: "https://github.com/GhostInTheToast/GhostTechPortScanner",
        featured: true,
    },
    Project {
        id: 3,
        title: "Well & Gas Data Scraper",
        description: "A comprehensive solution for scraping well data based on API numbers, inserting data into SQLite database, and serving through Flask API. Includes scraping, database insertion, and API endpoints with retry mechanisms and throttling protection.",
        tech: &["Python", "Flask", "SQLite", "Web Scraping", "API Development", "Database Design"],
        category: Category::Fullstack,
        icon: "\u{26FD}",
        background: "linear-gradient(135deg, #4facfe 0%, #00f2fe 100%)",
        repo_url: "https://github.com/GhostInTheToast/WellAndGasScraper",
        featured: true,
    },
    Project {
        id: 4,
        title: "GroupForHDR",
        description: "Automatically groups real estate bracketed photos by shared EXIF metadata for HDR blending via ML models. Groups photos based on focal length, aperture, dimensions, timestamps, and exposure compensation for professional photography workflows.",
        tech: &["Python", "Image Processing", "EXIF Metadata", "HDR Photography", "ML Models", "Real Estate"],
        category: Category::AiMl,
        icon: "\u{1F4F8}",
        background: "linear-gradient(135deg, #43e97b 0%, #38f9d7 100%)",
        repo_url: "https://github.com/GhostInTheToast/GroupForHDR",
        featured: false,
    },
    Project {
        id: 5,
        title: "ExifHarvester",
        description: "High-performance local EXIF metadata extraction pipeline using native Python multiprocessing. Recursively scans nested folders, extracts metadata with Pillow, and stores results in scalable .jsonl format. Built for speed and scale without cloud dependencies.",
        tech: &["Python", "Multiprocessing", "EXIF", "Pillow", "Parallel Processing", "File Systems"],
        category: Category::Backend,
        icon: "\u{1F504}",
        background: "linear-gradient(135deg, #fa709a 0%, #fee140 100%)",
        repo_url: "https://github.com/GhostInTheToast/ExifHarvester",
        featured: false,
    },
    Project {
        id: 6,
        title: "LeetCode Solutions",
        description: "A comprehensive collection of my LeetCode problem solutions demonstrating algorithmic thinking, data structure knowledge, and problem-solving approaches. Shows continuous learning and practice in competitive programming and technical interviews.",
        tech: &["Python", "Java", "Algorithms", "Data Structures", "Problem Solving", "Competitive Programming", "Technical Interviews"],
        category: Category::AiMl,
        icon: "\u{1F9EE}",
        background: "linear-gradient(135deg, #a8edea 0%, #fed6e3 100%)",
        repo_url: "https://github.com/GhostInTheToast/Leetcode",
        featured: false,
    },
];

/// Professional experience, newest first. The first
/// [`PRIMARY_EXPERIENCE_COUNT`](crate::timeline::PRIMARY_EXPERIENCE_COUNT)
/// entries are always shown.
pub static EXPERIENCE: &[TimelineEntry] = &[
    TimelineEntry {
        period: "August 2025 - Present",
        title: "Head of AI/ML - Moara.io",
        description: "Built retrieval + summarization stack (Elasticsearch + transformers/Hugging Face), improving Top-3 precision ~28% and cutting P95 search latency ~37%. Designed LLM guardrails with RAG citation binding, achieving ~99.9% factuality coverage. Scaled multi-tenant AWS stack with isolated environments and CI/CD, enabling daily zero-downtime releases.",
        highlight: None,
    },
    TimelineEntry {
        period: "April 2025 - August 2025",
        title: "Senior AI/ML Fullstack Engineer - AutoHDR",
        description: "Built secure, full-stack annotation platform on AWS using CVAT (19 Docker containers, EC2, Traefik) with React + MySQL. Fine-tuned transformer models for Computer Vision and Generative AI. Led redesign of image-segmentation pipelines using Meta's SAM v2, Detectron2, and GroundingDino. Wrote CUDA-safe, multi-process training code for fast GPU inference.",
        highlight: None,
    },
    TimelineEntry {
        period: "July 2024 - April 2025",
        title: "Full Stack Software Developer - Signature Performance, Inc.",
        description: "Enhanced VA's audit review system, improving operational efficiency for over 2,000 daily audits using Java Spring Boot, AngularJS, JSP, JUnit, and SQL. Led microservice projects creating new RESTful APIs. Developed dispute notification system increasing auditor productivity by 30% through streamlined workflows.",
        highlight: None,
    },
    TimelineEntry {
        period: "December 2022 - June 2024",
        title: "Full Stack Software Engineer - The Western Union",
        description: "Developed and demoed to CEO the Money Delivery Tracking Journey API and UI that secured funding for WU's Austin Branch. Used Spring and Couchbase with Kafka streaming data, mapped to path/locale using Camunda, displayed as ReactJS progress accordion. Led enterprise microservice applications driving $1B+ annual revenue using AWS ECS, CloudWatch, Java Spring, React, Docker, and Jenkins.",
        highlight: None,
    },
    TimelineEntry {
        period: "June 2022 - December 2022",
        title: "Full Stack System Software Engineer - Reynolds and Reynolds Company",
        description: "Managed end-to-end application development and delivery for clients, leveraging cutting-edge industry-standard tools. Streamlined data extraction from local government websites and Google search results. Optimized web scrapers using multithreading tools, reducing application runtime by 88%. Collaborated with development SMEs through PMD to collect and document product requirements.",
        highlight: None,
    },
    TimelineEntry {
        period: "December 2020 - June 2022",
        title: "Software Developer - Sobah Systems",
        description: "Developed custom software for private clients, focusing on scraping, cleaning, and storing large data from over 45,000 wiki URLs per day (Python, Beautiful Soup 4, PostgreSQL, Multithreading). Full Stack development (C#, JavaScript, ASP.NET Core, SQL) for web applications used by thousands of customers. Worked on main company product used in over 80% of car dealerships in North America.",
        highlight: None,
    },
    TimelineEntry {
        period: "2018 - Present",
        title: "Founder & Software Developer - GhostTech Enterprise",
        description: "Founded boutique freelancing venture to build creative, custom-tailored software solutions. Specialize in Python for unique technical challenges, from automating workflows to developing data pipelines and backend systems. Designed and deployed AI-powered chatbots for Discord platforms, tailored to client-specific use cases. Provide one-on-one consulting delivering scalable solutions in database architecture, API integration, automation, and intelligent agents.",
        highlight: None,
    },
];

pub static EDUCATION: &[TimelineEntry] = &[
    TimelineEntry {
        period: "Post Graduate Program",
        title: "AI & ML: Business Applications - University of Texas at Austin",
        description: "Business Applications focus, Austin, TX",
        highlight: None,
    },
    TimelineEntry {
        period: "2020 - 2022",
        title: "M.S. Computer Science - Lamar University, Beaumont, TX",
        description: "4.00 GPA, Rank 1, published thesis, specializing in algorithms and software engineering. Graduate Assistant, President's List every semester.",
        highlight: Some("Outstanding Graduate Student of the Year - name permanently engraved on plaque in Computer Science Department display case."),
    },
    TimelineEntry {
        period: "2016 - 2020",
        title: "B.S. Computer Science - Lamar University, Beaumont, TX",
        description: "Bachelor's degree in Computer Science. President's List and Dean's List awards, active member of Lamar ACM, and tutored fellow students in programming and computer science concepts.",
        highlight: None,
    },
];

pub static SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        title: "AI/ML & Computer Vision",
        icon: "\u{1F916}",
        skills: &[
            Skill::new("PyTorch", 95),
            Skill::new("Detectron2", 95),
            Skill::new("Segment Anything (SAM)", 90),
            Skill::new("GroundingDino", 80),
            Skill::new("HuggingFace", 95),
            Skill::new("CUDA", 90),
        ],
    },
    SkillCategory {
        title: "Backend & Languages",
        icon: "\u{2699}\u{FE0F}",
        skills: &[
            Skill::new("Java 8-22", 100),
            Skill::new("Python 2-3.12", 100),
            Skill::new("Spring Boot", 90),
            Skill::new("FastAPI", 90),
            Skill::new("Node.js", 85),
            Skill::new("C# ASP.NET", 80),
            Skill::new("C++", 75),
            Skill::new("Golang", 75),
        ],
    },
    SkillCategory {
        title: "Frontend & Cloud",
        icon: "\u{2601}\u{FE0F}",
        skills: &[
            Skill::new("React", 85),
            Skill::new("Next.js", 90),
            Skill::new("TypeScript", 90),
            Skill::new("AWS", 95),
            Skill::new("Docker", 95),
            Skill::new("Kubernetes", 80),
            Skill::new("Github/Gitlab VCS", 100),
            Skill::new("CI/CD", 90),
        ],
    },
];

pub const ADDITIONAL_SKILLS: &[&str] = &[
    "Git & GitHub", "CI/CD", "Testing (Jest, Cypress)", "Agile/Scrum",
    "System Design", "Algorithms", "Data Structures", "Machine Learning",
    "Microservices", "Performance Optimization", "Security Best Practices",
    "Code Review", "Technical Writing", "Mentoring", "Computer Vision",
    "LLMs", "RAG Systems", "Elasticsearch", "Kafka", "MongoDB", "PostgreSQL",
    "MySQL", "Snowflake", "Jenkins", "Bash", "Linux", "Swagger", "Postman",
];

pub static CONTACT_LINKS: &[ContactLink] = &[
    ContactLink {
        kind: LinkKind::Email,
        label: "Email",
        display: "bmood1@gmail.com",
        href: "mailto:bmood1@gmail.com",
        icon: "\u{1F4E7}",
    },
    ContactLink {
        kind: LinkKind::LinkedIn,
        label: "LinkedIn",
        display: "linkedin.com/in/coderbilal",
        href: "https://linkedin.com/in/coderbilal",
        icon: "\u{1F4BC}",
    },
    ContactLink {
        kind: LinkKind::GitHub,
        label: "GitHub",
        display: "github.com/GhostInTheToast",
        href: "https://github.com/GhostInTheToast",
        icon: "\u{1F4F1}",
    },
];

/// Footer/social icon order
pub fn social_links() -> impl Iterator<Item = &'static ContactLink> {
    [LinkKind::GitHub, LinkKind::LinkedIn, LinkKind::Email]
        .into_iter()
        .filter_map(|kind| CONTACT_LINKS.iter().find(|l| l.kind == kind))
}
