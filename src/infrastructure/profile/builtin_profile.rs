use crate::domain::model::{Command, NavItem, Profile};
use crate::domain::primitive::PromptIdentity;
use crate::interface_adapter::port::ProfilePort;
use crate::shared::error::AppError;

const BOOT_LINES: &[&str] = &[
    "ROHIT BIOS v1.9  (C) 2025 Rohit Systems, Inc.",
    "Main Processor : Intel(R) Core(TM) i7 Virtual @ 3.60GHz",
    "Memory Testing : 16384MB OK",
    "",
    "Detecting IDE Drives...",
    "  SATA0: 512GB NVMe SSD            OK",
    "  SATA1: USB BOOT DEVICE           OK",
    "",
    "Checking system configuration...   OK",
    "Loading RohitOS Portfolio Loader...",
    "Initializing Terminal Shell...",
    "",
    "Boot Priority: [RohitOS-Portfolio]",
    "Starting RohitOS...",
];

const HELP: &[&str] = &[
    "Available commands:",
    "  about       - Learn about me",
    "  projects    - View my projects",
    "  skills      - My technical skills",
    "  experience  - My experience",
    "  contact     - Contact details",
    "  clear       - Clear the terminal",
];

const ABOUT: &[&str] = &[
    "Hi, I'm Rohit Kumar Sahoo — a CSE student constantly exploring and learning whatever sparks my curiosity.",
];

const PROJECTS: &[&str] = &[
    "Some things I've worked on:",
    "- Portfolio v2 (this site)",
    "- Practice projects in C, C++, Python, and JavaScript",
    "- Experiments with web UIs, terminals, and animations",
];

const SKILLS: &[&str] = &[
    "[Languages] C, C++, Python, JavaScript",
    "[Web] HTML, CSS, JavaScript",
    "[Tools] Git, GitHub, VS Code",
    "[Exploring] React, backend basics, 3D on the web",
];

const EXPERIENCE: &[&str] = &[
    "Currently a CSE student, focusing on:",
    "> Problem solving",
    "> Understanding core CS concepts",
    "> Building interactive web experiments like this portfolio",
];

const CONTACT: &[&str] = &[
    "You can reach me at:",
    "Email:    rohitkumarsahoo37@gmail.com",
    "LinkedIn: www.linkedin.com/in/rohit-kumar-sahoo-a68a452b0",
    "GitHub:   github.com/RohitKSahoo",
];

/// The portfolio as shipped: every string of the original page.
pub fn builtin_profile() -> Profile {
    Profile {
        title: "RohitOS Portfolio".to_string(),
        prompt: PromptIdentity::new("rohit", "@portfolio", ":~$"),
        boot_lines: BOOT_LINES.iter().map(|l| l.to_string()).collect(),
        commands: vec![
            Command::new("help", HELP),
            Command::new("about", ABOUT),
            Command::new("projects", PROJECTS),
            Command::new("skills", SKILLS),
            Command::new("experience", EXPERIENCE),
            Command::new("contact", CONTACT),
        ],
        nav: ["help", "about", "projects", "skills", "experience", "contact", "clear"]
            .iter()
            .map(|c| NavItem::new(*c, *c))
            .collect(),
        card_front: vec![
            "ROHIT KUMAR SAHOO".to_string(),
            "CSE Student".to_string(),
            String::new(),
            "C · C++ · Python · JS".to_string(),
        ],
        card_back: vec![
            "rohitkumarsahoo37@gmail.com".to_string(),
            "github.com/RohitKSahoo".to_string(),
            String::new(),
            "type `contact` for more".to_string(),
        ],
    }
}

/// Serves the compiled-in profile.
pub struct BuiltinProfileAdapter;

impl ProfilePort for BuiltinProfileAdapter {
    fn load(&self) -> Result<Profile, AppError> {
        Ok(builtin_profile())
    }
}
