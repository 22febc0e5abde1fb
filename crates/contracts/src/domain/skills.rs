#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkillCategory {
    Languages,
    BackendTools,
    GameDev,
}

impl SkillCategory {
    /// Display order of the skill cards.
    pub fn all() -> [SkillCategory; 3] {
        [
            SkillCategory::Languages,
            SkillCategory::BackendTools,
            SkillCategory::GameDev,
        ]
    }

    pub fn title_key(&self) -> &'static str {
        match self {
            SkillCategory::Languages => "skills.languages",
            SkillCategory::BackendTools => "skills.backend",
            SkillCategory::GameDev => "skills.gamedev",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// Percentage, 0..=100.
    pub level: u8,
    pub category: SkillCategory,
}

const fn skill(name: &'static str, level: u8, category: SkillCategory) -> Skill {
    Skill {
        name,
        level,
        category,
    }
}

pub static SKILLS: &[Skill] = &[
    skill("C#", 25, SkillCategory::Languages),
    skill("C++", 25, SkillCategory::Languages),
    skill("Java", 25, SkillCategory::Languages),
    skill("JavaScript/TypeScript", 25, SkillCategory::Languages),
    skill("Python", 25, SkillCategory::Languages),
    skill(".NET", 25, SkillCategory::BackendTools),
    skill("MySQL", 25, SkillCategory::BackendTools),
    skill("Git", 25, SkillCategory::BackendTools),
    skill("VSCode", 25, SkillCategory::BackendTools),
    skill("Unity", 25, SkillCategory::GameDev),
    skill("Godot", 25, SkillCategory::GameDev),
    skill("Blender", 25, SkillCategory::GameDev),
    skill("Aseprite", 25, SkillCategory::GameDev),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillGroup {
    pub category: SkillCategory,
    pub skills: Vec<&'static Skill>,
}

pub fn skill_groups() -> Vec<SkillGroup> {
    SkillCategory::all()
        .into_iter()
        .map(|category| SkillGroup {
            category,
            skills: SKILLS.iter().filter(|s| s.category == category).collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groups_cover_every_skill_once() {
        let groups = skill_groups();
        assert_eq!(groups.len(), 3);
        let total: usize = groups.iter().map(|g| g.skills.len()).sum();
        assert_eq!(total, SKILLS.len());
        assert_eq!(groups[0].category, SkillCategory::Languages);
        assert_eq!(groups[0].skills[0].name, "C#");
        assert_eq!(groups[2].skills.len(), 4);
    }

    #[test]
    fn test_levels_are_percentages() {
        assert!(SKILLS.iter().all(|s| s.level <= 100));
    }
}
