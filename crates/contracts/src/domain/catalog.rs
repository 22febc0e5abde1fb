//! Authored project catalog. Ordering of `PROJECTS` is the display order.

use crate::shared::i18n::Bilingual;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    AnimatedImage,
    Video,
}

/// Preview asset of a project. `src` is site-relative and gets the
/// deployment base path prepended at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Media {
    pub src: &'static str,
    pub kind: MediaKind,
    pub poster: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectRecord {
    pub id: u32,
    pub title: &'static str,
    pub description: Bilingual,
    pub media: Media,
    pub tags: &'static [&'static str],
    pub demo_link: Option<&'static str>,
    pub source_link: Option<&'static str>,
}

impl ProjectRecord {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| *t == tag)
    }
}

pub static PROJECTS: &[ProjectRecord] = &[
    ProjectRecord {
        id: 1,
        title: "FRAGMOS",
        description: Bilingual::new(
            "Currently in development! A roguelike focused on achieving high scores with a retro-inspired visual style.",
            "Sendo desenvolvido atualmente! Um roguelike com foco em atingir a maior pontuação alta com um visual focado em relembrar jogos antigos",
        ),
        media: Media {
            src: "/fragmos_gif_preview.gif",
            kind: MediaKind::AnimatedImage,
            poster: None,
        },
        tags: &["Unity", "Godot"],
        demo_link: Some("https://www.youtube.com/watch?v=vAExNruPsa8"),
        source_link: None,
    },
    ProjectRecord {
        id: 2,
        title: "The Triangulo",
        description: Bilingual::new(
            "A simple roguelike created in just 3 days for a game jam. The goal is to survive as long as possible. I still plan to revisit and improve parts of the project.",
            "Um roguelike simples criado em apenas 3 dias para uma game jam. Seu objetivo é sobreviver o maior tempo possível. Ainda planejo refazer algumas coisas do projeto",
        ),
        media: Media {
            src: "/triangulo_preview.png",
            kind: MediaKind::Image,
            poster: None,
        },
        tags: &["Godot", "GDScript", "2D", "Pixel Art"],
        demo_link: Some("https://nepoun.itch.io/the-triangulo"),
        source_link: None,
    },
    ProjectRecord {
        id: 3,
        title: "Collection of old projects",
        description: Bilingual::new(
            "A collection of older projects I worked on for learning purposes. Most are not fully playable or complete prototypes. You can check them out by clicking 'Demo'.",
            "Uma coleção de antigos projetos que trabalhei com foco em estudo. Quase nenhum deles é um prototipo completo ou jogavel. Você pode ver mais pelo botão 'Demo'",
        ),
        media: Media {
            src: "/portfoliosnippets.gif",
            kind: MediaKind::AnimatedImage,
            poster: None,
        },
        tags: &["Godot", "Unity"],
        demo_link: Some("https://youtu.be/OcGCy0PRB6E?si=NWFVKHWrVbJPriP5"),
        source_link: None,
    },
    ProjectRecord {
        id: 4,
        title: "Meteorological data API",
        description: Bilingual::new(
            "Back-end for a meteorological data collection system, developed alongside simple data-collection stations.",
            "Back-end para um projeto de coleta de dados meteorologicos utilizando estações de coleta de dados(Junto do desenvolvimento de algumas estações simples dessas).",
        ),
        media: Media {
            src: "/tecsus.jpg",
            kind: MediaKind::Image,
            poster: None,
        },
        tags: &["JavaScript", "Typescript", "Mysql", "API", "Web"],
        demo_link: Some("https://theachievers-front-end.vercel.app"),
        source_link: Some("https://github.com/TheAchieversDSM/API-2023.1-Back-End-System"),
    },
];

pub fn find(id: u32) -> Option<&'static ProjectRecord> {
    PROJECTS.iter().find(|p| p.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_unique_and_ordered() {
        let ids: Vec<u32> = PROJECTS.iter().map(|p| p.id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn test_records_well_formed() {
        for project in PROJECTS {
            assert!(!project.title.is_empty());
            assert!(!project.tags.is_empty(), "{} has no tags", project.title);
            assert!(project.media.src.starts_with('/'));
            assert!(!project.description.en.is_empty());
            assert!(!project.description.pt.is_empty());
        }
    }

    #[test]
    fn test_find_and_has_tag() {
        let api = find(4).unwrap();
        assert_eq!(api.title, "Meteorological data API");
        assert!(api.has_tag("API"));
        assert!(!api.has_tag("Godot"));
        assert!(find(99).is_none());
    }
}
