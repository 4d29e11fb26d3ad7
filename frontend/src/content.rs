//! Everything the page displays that is not markup.

pub const OWNER_NAME: &str = "Mayank Raj";

pub const ROLES: &[&str] = &["Full Stack Developer", "Problem Solver", "AI Enthusiast"];

pub const HERO_INTRO: &str = "I create stunning digital experiences with modern technologies. \
    Specializing in React, JavaScript, and full-stack web development, I build responsive, \
    accessible, and performant applications that solve real-world problems.";

pub const RESUME_URL: &str =
    "https://drive.google.com/file/d/1oUvQMp813DU6bez49jdL2fXaQBU9kiQf/view?usp=sharing";

pub const PROFILE_IMAGE: &str = "/assets/profile.jpg";

pub const FOOTER_TAGLINE: &str =
    "Creating innovative digital experiences with modern technologies and a focus on performance.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub anchor: &'static str,
    pub label: &'static str,
}

impl NavItem {
    pub fn href(&self) -> String {
        format!("#{}", self.anchor)
    }
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { anchor: "home", label: "Home" },
    NavItem { anchor: "about", label: "About" },
    NavItem { anchor: "skills", label: "Skills" },
    NavItem { anchor: "projects", label: "Projects" },
    NavItem { anchor: "education", label: "Education" },
    NavItem { anchor: "contact", label: "Contact" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { label: "GitHub", url: "https://github.com/10noddy" },
    SocialLink { label: "LinkedIn", url: "https://www.linkedin.com/in/mayank-raj-180845252/" },
    SocialLink { label: "Instagram", url: "https://www.instagram.com/btwitsmayank6321/" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactKind {
    Location,
    Email,
    Phone,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactInfo {
    pub kind: ContactKind,
    pub text: &'static str,
}

pub const CONTACT_INFO: &[ContactInfo] = &[
    ContactInfo { kind: ContactKind::Location, text: "Patna, Bihar, India" },
    ContactInfo { kind: ContactKind::Email, text: "mayank.raj17404@gmail.com" },
    ContactInfo { kind: ContactKind::Phone, text: "+91-8102549284" },
];

pub const ABOUT_PARAGRAPHS: &[&str] = &[
    "My approach to development is holistic - I believe in creating applications that not only \
     look great but also perform flawlessly. I constantly stay updated with the latest \
     technologies and best practices to deliver cutting-edge solutions.",
    "Whether working on complex enterprise applications or creative personal projects, I bring \
     the same level of dedication, attention to detail, and technical expertise to everything I build.",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AboutItem {
    pub title: &'static str,
    pub description: &'static str,
}

pub const ABOUT_ITEMS: &[AboutItem] = &[
    AboutItem {
        title: "Full Stack Development",
        description: "I develop both client and server software, mastering frontend and backend technologies.",
    },
    AboutItem {
        title: "Web Applications",
        description: "I create responsive, performant web applications with modern frameworks and techniques.",
    },
    AboutItem {
        title: "Performance Optimization",
        description: "I optimize applications for speed, efficiency, and exceptional user experience.",
    },
    AboutItem {
        title: "Team Collaboration",
        description: "I thrive in collaborative environments, working effectively with cross-functional teams.",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TechSkill {
    pub name: &'static str,
    pub icon: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillGroup {
    pub title: &'static str,
    pub skills: &'static [TechSkill],
}

macro_rules! devicon {
    ($name:literal, $slug:literal) => {
        TechSkill {
            name: $name,
            icon: concat!("https://cdn.jsdelivr.net/gh/devicons/devicon/icons/", $slug, "/", $slug, "-original.svg"),
        }
    };
}

pub const SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        title: "Programming Languages",
        skills: &[devicon!("JavaScript", "javascript"), devicon!("Java", "java"), devicon!("C", "c")],
    },
    SkillGroup {
        title: "Frontend Development",
        skills: &[
            devicon!("React", "react"),
            devicon!("HTML5", "html5"),
            devicon!("CSS3", "css3"),
            TechSkill {
                name: "Tailwind CSS",
                icon: "https://www.vectorlogo.zone/logos/tailwindcss/tailwindcss-icon.svg",
            },
        ],
    },
    SkillGroup {
        title: "Backend Development",
        skills: &[
            devicon!("Node.js", "nodejs"),
            devicon!("Express", "express"),
            devicon!("MongoDB", "mongodb"),
            devicon!("MySQL", "mysql"),
        ],
    },
    SkillGroup {
        title: "Developer Tools",
        skills: &[
            devicon!("VS Code", "vscode"),
            devicon!("Git", "git"),
            devicon!("JIRA", "jira"),
            devicon!("Figma", "figma"),
            TechSkill {
                name: "Postman",
                icon: "https://www.vectorlogo.zone/logos/getpostman/getpostman-icon.svg",
            },
            TechSkill { name: "Cursor AI", icon: "https://cursor.sh/favicon.ico" },
        ],
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SoftSkill {
    pub name: &'static str,
    pub description: &'static str,
}

pub const SOFT_SKILLS: &[SoftSkill] = &[
    SoftSkill {
        name: "Problem Solving",
        description: "Ability to analyze complex problems and develop effective solutions",
    },
    SoftSkill {
        name: "Teamwork",
        description: "Strong collaboration skills and ability to work effectively in cross-functional teams",
    },
    SoftSkill {
        name: "Communication",
        description: "Clear and effective communication in both technical and non-technical contexts",
    },
    SoftSkill {
        name: "Adaptability",
        description: "Quick to adapt to new technologies and changing project requirements",
    },
    SoftSkill {
        name: "Analytical Thinking",
        description: "Strong analytical skills with attention to detail and logical problem-solving",
    },
    SoftSkill {
        name: "Planning",
        description: "Excellent organizational and project planning capabilities",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub category: &'static str,
    pub image: &'static str,
    pub description: &'static str,
    pub long_description: &'static str,
    pub technologies: &'static [&'static str],
    pub live: Option<&'static str>,
    pub github: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "Portfolio Website",
        category: "Fullstack Development",
        image: "/assets/portfolio.png",
        description: "Modern portfolio website with stunning animations, built with Rust, Yew and WebAssembly.",
        long_description: "A modern, responsive portfolio website showcasing my projects and skills. \
            Written in Rust and rendered in the browser with Yew, compiled to WebAssembly. Features \
            include smooth scroll-triggered animations, interactive project cards with modal views, \
            a dynamic skill showcase, and a contact form integrated with EmailJS.",
        technologies: &["Rust", "Yew", "WebAssembly", "CSS", "EmailJS"],
        live: None,
        github: "https://github.com/10noddy/portfolio",
    },
    Project {
        id: 2,
        title: "WanderLust",
        category: "Full Stack",
        image: "/assets/wanderlust.png",
        description: "An Airbnb-inspired full-stack web application with complete CRUD functionality.",
        long_description: "Wanderlust is a comprehensive full-stack web-based rental platform inspired \
            by Airbnb. Built using MongoDB, Express.js, EJS, and JavaScript, it supports full CRUD \
            operations on property listings, including image uploads, ratings, and detailed \
            descriptions. Features include user authentication, authorization, session management, \
            flash messaging, and RESTful APIs for scalable routing.",
        technologies: &["JavaScript", "EJS", "MongoDB", "Express.js"],
        live: Some("https://wanderlust-us3r.onrender.com/listings"),
        github: "https://github.com/10noddy/wanderlust",
    },
    Project {
        id: 3,
        title: "Amazon Clone",
        category: "Web Development",
        image: "https://images.pexels.com/photos/2882634/pexels-photo-2882634.jpeg?auto=compress&cs=tinysrgb&w=800",
        description: "A basic clone of Amazon with similar basic functions, built using HTML and CSS.",
        long_description: "Created during high school, this project is a basic clone of Amazon that \
            implements core functionalities. HTML is the base of the page and CSS gives it a \
            visually appealing, user-presentable interface.",
        technologies: &["HTML", "CSS"],
        live: None,
        github: "https://github.com/10noddy/amazon-clone",
    },
    Project {
        id: 4,
        title: "Simon Says Game",
        category: "Web Game",
        image: "/assets/simonSays.png",
        description: "A classic memory-based game with dynamic UI and interactive animations.",
        long_description: "A classic memory-based game built using JavaScript, CSS, and HTML. The game \
            features dynamic UI, event-driven gameplay, and progressively increasing difficulty \
            levels, with interactive animations and sound effects.",
        technologies: &["HTML", "CSS", "JavaScript"],
        live: None,
        github: "https://github.com/10noddy/simon-says",
    },
];

/// Technologies shown on a project card, plus how many were left out.
pub fn tag_preview(technologies: &'static [&'static str], limit: usize) -> (&'static [&'static str], usize) {
    let shown = technologies.len().min(limit);
    (&technologies[..shown], technologies.len() - shown)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EducationEntry {
    pub degree: &'static str,
    pub institution: &'static str,
    pub location: &'static str,
    pub period: &'static str,
    pub description: &'static str,
}

pub const EDUCATION: &[EducationEntry] = &[
    EducationEntry {
        degree: "BTech in Computer Science",
        institution: "Kalinga Institute of Industrial Technology",
        location: "Bhubaneswar, India",
        period: "2022 - Present",
        description: "Currently pursuing Bachelor's in Computer Science with a CGPA of 8.13. Studying \
            core computer science subjects including Data Structures and Algorithms, Operating \
            Systems, Object Oriented Programming, and Database Management Systems.",
    },
    EducationEntry {
        degree: "12th in Mathematics, CBSE",
        institution: "DAV BSEB",
        location: "Patna, India",
        period: "2021 - 2022",
        description: "Completed senior secondary education with 79.3% marks.",
    },
    EducationEntry {
        degree: "High School Education, CBSE",
        institution: "Gyan Niketan",
        location: "Patna, India",
        period: "2019 - 2020",
        description: "Completed high school education with 92% marks.",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Certification {
    pub name: &'static str,
    pub issuer: &'static str,
    pub date: &'static str,
    pub link: &'static str,
}

pub const CERTIFICATIONS: &[Certification] = &[
    Certification {
        name: "Strategy and Game Theory for Management",
        issuer: "Coursera",
        date: "Jan 2025",
        link: "https://www.coursera.org/account/accomplishments/verify/QDSZH7SIPBKU",
    },
    Certification {
        name: "Business Analytics for Decision Making",
        issuer: "Coursera",
        date: "Dec 2024",
        link: "https://www.coursera.org/account/accomplishments/verify/V0S38JGGUTU3",
    },
    Certification {
        name: "Foundations: Data, Data, Everywhere by Google",
        issuer: "Coursera",
        date: "June 2023",
        link: "https://www.coursera.org/account/accomplishments/verify/83JQR9ZENJQB",
    },
    Certification {
        name: "AICTE Virtual Internship: AI-ML Virtual Internship",
        issuer: "AWS",
        date: "Mar 2025",
        link: "https://aictecert.eduskillsfoundation.org/pages/home/verify.php?cert=f4f788c62e64dc3215cc3d4dd1693f70",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn nav_covers_every_section_once() {
        let anchors: Vec<&str> = NAV_ITEMS.iter().map(|item| item.anchor).collect();
        assert_eq!(
            anchors,
            ["home", "about", "skills", "projects", "education", "contact"]
        );
        assert_eq!(NAV_ITEMS[5].href(), "#contact");
    }

    #[test]
    fn project_ids_are_unique() {
        let ids: HashSet<u32> = PROJECTS.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), PROJECTS.len());
    }

    #[test]
    fn external_links_use_https() {
        let links = SOCIAL_LINKS
            .iter()
            .map(|s| s.url)
            .chain(PROJECTS.iter().map(|p| p.github))
            .chain(PROJECTS.iter().filter_map(|p| p.live))
            .chain(CERTIFICATIONS.iter().map(|c| c.link))
            .chain(std::iter::once(RESUME_URL));
        for link in links {
            assert!(link.starts_with("https://"), "{} is not https", link);
        }
    }

    #[test]
    fn devicon_urls_follow_cdn_layout() {
        let react = SKILL_GROUPS[1].skills[0];
        assert_eq!(react.name, "React");
        assert_eq!(
            react.icon,
            "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/react/react-original.svg"
        );
    }

    #[test]
    fn roles_are_not_empty() {
        assert!(!ROLES.is_empty());
        assert!(ROLES.iter().all(|role| !role.is_empty()));
    }

    #[test]
    fn tag_preview_caps_and_counts_the_rest() {
        let (shown, hidden) = tag_preview(PROJECTS[0].technologies, 3);
        assert_eq!(shown, ["Rust", "Yew", "WebAssembly"]);
        assert_eq!(hidden, 2);

        let (shown, hidden) = tag_preview(PROJECTS[2].technologies, 3);
        assert_eq!(shown, ["HTML", "CSS"]);
        assert_eq!(hidden, 0);
    }
}
