use serde_json::json;

use super::entities::ResumeDocument;
use crate::shared::lenient::record_or_default;

/// Resume written to the local cache the first time it is read.
pub fn default_resume() -> ResumeDocument {
    record_or_default(json!({
        "education": [
            {
                "school": "University of California, San Diego",
                "degree": "B.S. in Computer Engineering",
                "period": "09/2023 – 12/2025"
            },
            {
                "school": "University of California, Santa Barbara",
                "degree": "B.S. in Electrical Engineering",
                "period": "09/2021 – 09/2023"
            }
        ],
        "entrepreneurial": [
            {
                "title": "Founder & CEO — RoundSense (Preparation & Planning)",
                "summary": "Subscription-based AI tactical insights for competitive gamers · 07/2025 – Present",
                "bullets": [
                    "Led a 3-member team on product design and business research; analyzed 5 analytics platforms (e.g., Leetify, Blitz) to identify unmet needs.",
                    "Defined MVP (Valorant in-game tips overlay + Discord bot) and product roadmap (training suite, multi-game expansion).",
                    "Built TAM/SAM and financial models; projected first-year revenue ~$591K and net income ~$173K; prepared investor deck."
                ]
            },
            {
                "title": "Founder & CEO — TreeVerse Technology (China)",
                "summary": "Custom travel services for HNW clients · 05/2023 – Present",
                "bullets": [
                    "Built an 8-person team; negotiated 14 key supplier partnerships with up to 45% below market rates.",
                    "Served 2,000+ HNW clients across US/EU; achieved ~4M RMB revenue in 2024 with ~300% YoY growth.",
                    "Developed plans for AI-based risk management (e.g., weather/regulatory IRROPs) and a CRM to improve retention."
                ]
            }
        ],
        "internship": [
            {
                "title": "MRI Engineering Intern — GE Medical Systems (Hangzhou, China)",
                "period": "07/2025 – 09/2025",
                "bullets": [
                    "Assisted installation of 3 MRI systems; ensured correct component configuration and smooth integration.",
                    "Monitored 40+ hours of real-time data; optimized parameters to reduce downtime by ~10% and improve stability."
                ]
            },
            {
                "title": "Supply Chain Project Specialist — Simon International Logistics (Hangzhou, China)",
                "period": "12/2024 – 06/2025",
                "bullets": [
                    "Produced a 3,000-word report on lithium battery export to LA (customs, qualifications), enabling two partnerships with $20B+ market-cap firms.",
                    "Engaged 150+ local vendors via calls, email, visits, and fairs; secured 18 partnerships (~12% conversion).",
                    "Led 3 interns to redesign the corporate site, increasing traffic ~20% and time-on-page ~35% within two weeks."
                ]
            }
        ],
        "projects": [
            {
                "title": "Custom 16-bit Pipelined Processor",
                "period": "03/2025 – 06/2025 · UC San Diego (Supervisor: John A. Eldon)",
                "bullets": [
                    "Designed ISA, datapath, ALU, control, and memory interface in SystemVerilog.",
                    "Verified via assembly-level simulation and FPGA deployment; executed all benchmarks stably and efficiently."
                ]
            },
            {
                "title": "Mobile App Prototype (Team Lead)",
                "period": "01/2025 – 03/2025 · UC San Diego (Supervisor: Bill Griswold)",
                "bullets": [
                    "Drove requirements, sprints, retros; applied BDD and Design-by-Contract.",
                    "Guided architecture with OOP & patterns; CI/CD and reviews reduced defects and ensured on-time MVP."
                ]
            }
        ],
        "activities": [
            "Head of PR, UCSB CSSA (09/2021 – 06/2023): built 6 sponsor partnerships; raised $10,000+.",
            "Athlete, UCSD Badminton Club (09/2021 – 03/2023): 3rd place, CSSA Badminton Tournament 2022."
        ],
        "skills": [
            {
                "label": "Programming & Software",
                "value": "C, C++, Java, Python, MATLAB, HTML, MS Office"
            },
            {
                "label": "Languages",
                "value": "Chinese (Native), English (Professional)"
            },
            {
                "label": "Interests",
                "value": "Snowboarding (Black Diamond), Robotics (2015 World Cup Best Designer), Esports, Aviation (IRROPs)"
            }
        ]
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_section_is_populated() {
        let resume = default_resume();

        assert_eq!(resume.education.len(), 2);
        assert_eq!(resume.entrepreneurial.len(), 2);
        assert_eq!(resume.internship.len(), 2);
        assert_eq!(resume.projects.len(), 2);
        assert_eq!(resume.activities.len(), 2);
        assert_eq!(resume.skills.len(), 3);
        assert_eq!(resume.internship[0].bullets.len(), 2);
    }
}
