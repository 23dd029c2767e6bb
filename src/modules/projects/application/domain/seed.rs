use super::entities::ProjectRecord;

#[allow(clippy::too_many_arguments)]
fn record(
    id: &str,
    title: &str,
    timeframe: &str,
    desc: &str,
    tags: &[&str],
    image: &str,
    alt: &str,
    link: &str,
    link_label: &str,
) -> ProjectRecord {
    ProjectRecord {
        id: Some(id.to_string()),
        title: Some(title.to_string()),
        timeframe: Some(timeframe.to_string()),
        desc: Some(desc.to_string()),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        image: Some(image.to_string()),
        alt: Some(alt.to_string()),
        link: Some(link.to_string()),
        link_label: Some(link_label.to_string()),
    }
}

/// Records written to the local cache the first time it is read.
pub fn default_projects() -> Vec<ProjectRecord> {
    vec![
        record(
            "cpu",
            "Custom 16-bit Pipelined Processor",
            "03/2025 – 06/2025 · UC San Diego",
            "Designed a five stage pipelined 16 bit CPU from the ISA up, including datapath, ALU, control logic, hazard detection, and forwarding. Implemented the design in SystemVerilog, wrote directed and random tests, and deployed to an FPGA board to run benchmark programs such as matrix multiply and Fibonacci in hardware.",
            &["SystemVerilog", "FPGA", "CPU design", "Pipelining"],
            "PIPLINE.png",
            "Diagram for a custom 16 bit processor project",
            "https://github.com/X1aoshu",
            "View related repository",
        ),
        record(
            "mobile-app",
            "Mobile App Prototype — Team Lead",
            "01/2025 – 03/2025 · UC San Diego",
            "Led a six person team to design and prototype a mobile application from zero, using agile iterations and sprint planning. Applied behaviour driven development and design by contract to keep requirements and tests aligned, and set up CI to automatically run checks on every pull request before merging.",
            &["Team leadership", "Mobile UX", "BDD", "CI/CD"],
            "cse.png",
            "UCSD CSE Department LOGO",
            "https://example.com/mobile-case-study",
            "Read project summary",
        ),
        record(
            "roundsense",
            "RoundSense — Competitive Gaming Insights",
            "07/2025 – Present · Founder and Product Lead",
            "Defined RoundSense as a subscription based tactical assistant for competitive gamers starting with Valorant. Researched the ecosystem of existing analytics tools, mapped the gaps between what high level players want and what current tools provide, and scoped an MVP that combines an in game overlay with a Discord bot.",
            &["Product design", "Esports analytics", "Startup"],
            "RoundSense.png",
            "LOGO of RoundSense",
            "https://example.com/roundsense-overview",
            "See product concept",
        ),
        record(
            "treeverse",
            "TreeVerse Technology — HNW Travel Services",
            "05/2023 – Present · Founder and Operator",
            "Founded TreeVerse to serve high net worth clients with custom travel planning beyond standard tour packages. Built and managed an eight person team, negotiated long term partnerships with overseas suppliers, and designed internal processes for quoting, risk checking, and on trip support.",
            &["Operations", "Travel industry", "Partnerships", "Risk management"],
            "TreeVerse.png",
            "LOGO of TreeVerse",
            "https://example.com/treeverse-story",
            "Learn about TreeVerse",
        ),
    ]
}
