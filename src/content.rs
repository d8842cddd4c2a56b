//! Fixed copy for the home page sections that are not driven by the project
//! data file.

pub const OWNER_NAME: &str = "Chen Hsin Chiang";
pub const EMAIL: &str = "chenhsin.chiang4@gmail.com";

#[derive(Debug, Clone, Copy)]
pub struct NavLink {
    pub label: &'static str,
    pub anchor: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Home", anchor: "home" },
    NavLink { label: "About", anchor: "about" },
    NavLink { label: "Projects", anchor: "projects" },
    NavLink { label: "Certifications", anchor: "certifications" },
    NavLink { label: "Contact", anchor: "contact" },
];

#[derive(Debug, Clone, Copy)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub struct Hero {
    pub greeting: &'static str,
    pub tagline: &'static str,
    pub intro: &'static str,
    pub call_to_action: &'static str,
    pub links: &'static [SocialLink],
}

pub const HERO: Hero = Hero {
    greeting: "Hi, I'm",
    tagline: "Graduate Student | Mechanical & Robotics Engineer | Mechatronic Systems",
    intro: "I'm a mechanical and robotics engineer passionate about designing intelligent, \
            hands-on systems. My work bridges mechanical design, embedded control, and autonomous \
            robotics, blending creativity with precision to build machines that think and move \
            with purpose.",
    call_to_action: "Get In Touch",
    links: &[
        SocialLink { label: "GitHub", href: "https://github.com/NayrChiang" },
        SocialLink { label: "LinkedIn", href: "https://linkedin.com/in/chen-hsin-chiang-4a0b181b9" },
        SocialLink { label: "Email", href: "mailto:chenhsin.chiang4@gmail.com" },
    ],
};

/// A paragraph with one emphasized run in the middle.
#[derive(Debug, Clone, Copy)]
pub struct Paragraph {
    pub before: &'static str,
    pub strong: &'static str,
    pub after: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct TitledText {
    pub title: &'static str,
    pub text: &'static str,
}

pub struct About {
    pub profile_image: &'static str,
    pub profile_alt: &'static str,
    pub bio: &'static [Paragraph],
    pub highlights: &'static [TitledText],
    pub core_strengths: &'static [TitledText],
}

pub const ABOUT: About = About {
    profile_image: "/images/profile-picture.JPG",
    profile_alt: "Chen Hsin Chiang Profile Picture",
    bio: &[
        Paragraph {
            before: "I'm ",
            strong: "Chen Hsin Chiang",
            after: ", a Mechanical & Mechatronics Engineer passionate about building intelligent \
                    robotic systems that merge mechanical precision with embedded control.",
        },
        Paragraph {
            before: "I hold an ",
            strong: "M.S.E. in Mechanical Engineering and Applied Mechanics (Mechatronic & Robotic Systems)",
            after: " from the University of Pennsylvania, where I focused on autonomous systems, \
                    perception, and embedded firmware development.",
        },
        Paragraph {
            before: "I hold a ",
            strong: "B.A.Sc. in Mechanical Engineering (High Honors)",
            after: " from the University of Toronto, where I specialized in robotics, control \
                    systems, and manufacturing design. My work bridges the intersection of \
                    mechanical design, embedded programming, and system integration, turning \
                    complex electromechanical ideas into robust, real-world prototypes.",
        },
    ],
    highlights: &[
        TitledText {
            title: "Autonomous Systems",
            text: "Designed and programmed autonomous systems, from quadcopters with SE(3) control \
                   and visual-inertial odometry to robotic arms powered by ROS and AprilTag vision.",
        },
        TitledText {
            title: "Embedded Firmware Development",
            text: "Developed embedded C++ firmware on STM32 for high-voltage EV systems, achieving \
                   sub-10 ms fault response and reducing debug time by ~30%.",
        },
        TitledText {
            title: "Mechanical Design & Optimization",
            text: "Engineered load-bearing aluminum structures and performed FEA-driven optimization \
                   in SolidWorks and ANSYS, cutting stress concentrations by ~50%.",
        },
        TitledText {
            title: "Technical Expertise",
            text: "Experienced in C++, Python, MATLAB, ROS 2, SolidWorks, ANSYS, and NX, with \
                   hands-on expertise in 3D printing, CNC machining, and PCB prototyping.",
        },
    ],
    core_strengths: &[
        TitledText {
            title: "Robotics & Controls",
            text: "ROS 2, EKF, path planning, embedded C++, sensor fusion",
        },
        TitledText { title: "Mechanical Design", text: "CAD modeling, FEA, vibration/fatigue analysis" },
        TitledText {
            title: "Prototyping & Manufacturing",
            text: "CNC, additive manufacturing, PCB design",
        },
        TitledText {
            title: "Programming & Simulation",
            text: "Python, MATLAB, STM32, control algorithms",
        },
    ],
};

#[derive(Debug, Clone, Copy)]
pub struct Skill {
    pub name: &'static str,
    /// Years of use, in half-year steps.
    pub years: f32,
}

impl Skill {
    pub fn years_label(&self) -> String {
        if self.years == 1.0 {
            "1 year".to_string()
        } else {
            format!("{} years", self.years)
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SkillCategory {
    pub title: &'static str,
    pub skills: &'static [Skill],
}

const fn skill(name: &'static str, years: f32) -> Skill {
    Skill { name, years }
}

pub const SKILLS_SUBTITLE: &str = "Technologies and tools I work with";

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        title: "Robotics",
        skills: &[
            skill("Rotations & Rigid Transformations", 1.0),
            skill("Quadrotor Dynamics", 0.5),
            skill("Path Planning", 0.5),
            skill("Trajectory Planning", 0.5),
            skill("Graph Search Algorithms (A*)", 0.5),
            skill("SLAM", 0.5),
            skill("Visual Odometry", 0.5),
            skill("Kalman Filtering", 0.5),
            skill("Forward/Inverse Kinematics", 0.5),
            skill("Jacobians", 0.5),
            skill("Manipulator Control", 0.5),
            skill("ROS", 0.5),
            skill("Gazebo Simulation", 0.5),
            skill("PID Control", 1.0),
            skill("State Space Control", 0.5),
            skill("LQR", 0.5),
            skill("System Modeling", 1.5),
            skill("Stability Analysis", 1.5),
        ],
    },
    SkillCategory {
        title: "Embedded Systems",
        skills: &[
            skill("Arduino", 1.0),
            skill("C/C++", 1.0),
            skill("ESP32", 0.5),
            skill("STM32", 0.5),
            skill("Microcontroller Architecture", 0.5),
            skill("Interrupts & Timers", 0.5),
            skill("I2C/SPI/UART", 0.5),
            skill("ADC/DAC", 0.5),
            skill("Motor Control", 0.5),
            skill("Sensor Integration", 0.5),
            skill("PWM Control", 0.5),
            skill("Encoder Systems", 0.5),
            skill("Bluetooth Communication", 0.5),
            skill("ESP-NOW", 0.5),
            skill("UDP", 0.5),
            skill("Embedded Control Loops", 0.5),
            skill("State Machines", 0.5),
            skill("Code Optimization", 0.5),
            skill("Memory Management", 0.5),
            skill("Real-time Systems", 1.0),
            skill("Embedded Firmware Development", 0.5),
            skill("Op-Amp Circuits", 0.5),
            skill("Active/Passive Filters", 0.5),
            skill("PSPICE/Eagle", 0.5),
            skill("PCB Design", 0.5),
        ],
    },
    SkillCategory {
        title: "Mechanical Engineering",
        skills: &[
            skill("SolidWorks", 1.5),
            skill("CAD/CAM", 1.0),
            skill("Engineering Drawing", 0.5),
            skill("Mechanism Design", 0.5),
            skill("Gear Design", 1.0),
            skill("Motion Transmission", 0.5),
            skill("Reverse Engineering", 0.5),
            skill("Mechanics of Materials", 0.5),
            skill("Finite Element Analysis (FEA)", 0.5),
            skill("Stress Analysis", 0.5),
            skill("Load Analysis", 0.5),
            skill("Failure Analysis", 0.5),
            skill("Fatigue Analysis", 0.5),
            skill("Shaft Design", 0.5),
            skill("Bearing Selection", 0.5),
            skill("Fastener Design", 0.5),
            skill("Structural Analysis", 0.5),
            skill("Mechanism Kinematics", 0.5),
            skill("Machine Dynamics", 0.5),
            skill("Gear Trains", 0.5),
            skill("Vector Loop Analysis", 0.5),
            skill("MATLAB Kinematics Modeling", 0.5),
        ],
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Certification {
    pub title: &'static str,
    pub institution: &'static str,
    pub description: &'static str,
    pub year: &'static str,
    pub image: &'static str,
    pub alt: &'static str,
}

pub const CERTIFICATIONS_TITLE: &str = "Certifications & Achievements";
pub const CERTIFICATIONS_SUBTITLE: &str = "Academic credentials and professional achievements";

pub const CERTIFICATIONS: &[Certification] = &[
    Certification {
        title: "Master of Science in Engineering",
        institution: "University of Pennsylvania",
        description: "Mechanical Engineering & Applied Mechanics, Mechatronic & Robotic Systems",
        year: "2023-2025",
        image: "/images/upenn_diploma.jpg",
        alt: "University of Pennsylvania Master of Science in Engineering Diploma",
    },
    Certification {
        title: "Bachelor of Applied Science",
        institution: "University of Toronto",
        description: "Mechanical Engineering, Minor in Robotics and Mechatronics",
        year: "2018 - 2023",
        image: "/images/uteng-mechanical-composite-2022-2023.jpg",
        alt: "UTENG Mechanical Engineering Composite 2022-2023",
    },
    Certification {
        title: "SOLIDWORKS Mechanical Design Associate",
        institution: "Dassault Systèmes",
        description: "Mechanical Design at the level of ASSOCIATE - Academic exam at University of \
                      Toronto. Certificate License Code: C-VTBZJQ58HW",
        year: "November 22, 2019",
        image: "/images/solidworks-certificate.jpg",
        alt: "SOLIDWORKS Mechanical Design Associate Certificate - C-VTBZJQ58HW",
    },
];

pub const PROJECTS_TITLE: &str = "Featured Projects";
pub const PROJECTS_SUBTITLE: &str = "Some of my recent work";

pub const CONTACT_TITLE: &str = "Contact Me";
pub const CONTACT_SUBTITLE: &str = "Interested in working together? Let's talk!";

pub const CONTACT_CHANNELS: &[TitledText] = &[
    TitledText { title: "Email", text: EMAIL },
    TitledText { title: "Location", text: "Vancouver, BC, Canada" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn years_are_pluralized_except_for_one() {
        assert_eq!(skill("A", 1.0).years_label(), "1 year");
        assert_eq!(skill("B", 0.5).years_label(), "0.5 years");
        assert_eq!(skill("C", 1.5).years_label(), "1.5 years");
    }

    #[test]
    fn nav_links_point_at_home_sections() {
        let anchors: Vec<&str> = NAV_LINKS.iter().map(|link| link.anchor).collect();
        assert!(anchors.contains(&"projects"));
        assert!(anchors.contains(&"contact"));
    }
}
