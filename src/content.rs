pub const PANEL_COUNT: usize = 6;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scene {
    Slate,
    Hook,
    CaseStudy(usize),
    Pipeline,
    Finale,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelDescriptor {
    pub scene: Scene,
    pub cursor_label: Option<&'static str>,
    pub parallax: bool,
    pub reveal_texts: usize,
    // labels of the interactive elements inside the panel, in document order
    pub hover_labels: &'static [&'static str],
}

pub const PANELS: [PanelDescriptor; PANEL_COUNT] = [
    PanelDescriptor {
        scene: Scene::Slate,
        cursor_label: None,
        parallax: false,
        reveal_texts: 0,
        hover_labels: &[],
    },
    PanelDescriptor {
        scene: Scene::Hook,
        cursor_label: None,
        parallax: false,
        reveal_texts: 3,
        hover_labels: &[],
    },
    PanelDescriptor {
        scene: Scene::CaseStudy(0),
        cursor_label: Some("WATCH"),
        parallax: true,
        reveal_texts: 0,
        hover_labels: &["PLAY"],
    },
    PanelDescriptor {
        scene: Scene::CaseStudy(1),
        cursor_label: Some("WATCH"),
        parallax: true,
        reveal_texts: 0,
        hover_labels: &["PLAY"],
    },
    PanelDescriptor {
        scene: Scene::Pipeline,
        cursor_label: None,
        parallax: false,
        reveal_texts: 0,
        hover_labels: &["STEP 01", "STEP 02", "STEP 03", "STEP 04"],
    },
    PanelDescriptor {
        scene: Scene::Finale,
        cursor_label: None,
        parallax: false,
        reveal_texts: 0,
        hover_labels: &["HIRE US"],
    },
];

pub fn reveal_counts() -> Vec<usize> {
    PANELS.iter().map(|panel| panel.reveal_texts).collect()
}

pub struct CaseStudy {
    pub watermark: &'static str,
    pub watermark_right: bool,
    pub client: &'static str,
    pub tag: &'static str,
    pub quote: &'static str,
    pub image: &'static str,
    pub image_alt: &'static str,
}

pub const CASE_STUDIES: [CaseStudy; 2] = [
    CaseStudy {
        watermark: "NOIR",
        watermark_right: false,
        client: "Vault.io",
        tag: "2024 / FINTECH",
        quote: "\"We uploaded raw office B-roll. AdVerse returned a full heist-style launch film with AI voiceover and avatar host.\"",
        image: "https://images.unsplash.com/photo-1486406146926-c627a92ad1ab?q=80&w=2670&auto=format&fit=crop",
        image_alt: "Abstract Architecture",
    },
    CaseStudy {
        watermark: "DRIFT",
        watermark_right: true,
        client: "HyperScale",
        tag: "2025 / SAAS",
        quote: "\"We shared rough product B-roll. They cut a kinetic story with AI narration and avatar talent\u{2014}no dashboards needed.\"",
        image: "https://images.unsplash.com/photo-1485846234645-a62644f84728?q=80&w=2659&auto=format&fit=crop",
        image_alt: "Film Projector Light",
    },
];

pub const PIPELINE_STEPS: [(&str, &str); 4] = [
    ("01", "Upload B-roll & Brand Kit"),
    ("02", "AI Script + Voice + Avatar"),
    ("03", "Cinematic Cut & Grade"),
    ("04", "Delivery & Launch Toolkit"),
];

pub const SCRIPT_LINES: [&str; 3] = [
    "The team is huddled around a monitor. The glow of the screen illuminates their faces.",
    "// We utilize Arri Alexa cinema cameras.",
    "// We grade in DaVinci Resolve Studio.",
];

pub const CREDITS_ROLL: [&str; 4] = [
    "DIRECTED BY ADVERSE",
    "PRODUCED BY CLIENTS",
    "EDITED IN LA",
    "MUSIC BY SYNTHWAVE",
];

pub const CONTACT_CREDITS: [(&str, &str); 3] = [
    ("Director", "AdVerse Media"),
    ("Location", "Los Angeles, CA"),
    ("Contact", "hello@adverse.media"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_study_panels_point_at_existing_copy() {
        for panel in PANELS {
            if let Scene::CaseStudy(index) = panel.scene {
                assert!(index < CASE_STUDIES.len());
                assert!(panel.parallax);
            }
        }
    }

    #[test]
    fn pipeline_labels_match_the_steps() {
        let pipeline = PANELS
            .iter()
            .find(|panel| panel.scene == Scene::Pipeline)
            .map(|panel| panel.hover_labels);
        let expected: Vec<String> = PIPELINE_STEPS
            .iter()
            .map(|(step, _)| format!("STEP {}", step))
            .collect();
        assert_eq!(pipeline.map(|labels| labels.to_vec()), Some(expected.iter().map(String::as_str).collect()));
    }

    #[test]
    fn only_the_hook_reveals_text() {
        assert_eq!(reveal_counts(), vec![0, 3, 0, 0, 0, 0]);
    }
}
