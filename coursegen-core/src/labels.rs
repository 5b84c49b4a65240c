//! Static label tables for generated pages.
//!
//! Only text produced by the generators (section headers, default titles,
//! placeholders, badge labels, prompts) is localized. Content taken from the
//! course plan is emitted as written.

use std::fmt;

/// Output language for generated labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Lang {
    /// Spanish
    #[default]
    Es,
    /// English
    En,
    /// French
    Fr,
}

impl Lang {
    /// Returns the ISO 639-1 code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Es => "es",
            Self::En => "en",
            Self::Fr => "fr",
        }
    }

    /// Returns the label set for this language.
    #[must_use]
    pub const fn labels(self) -> &'static Labels {
        Labels::for_lang(self)
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// The resolved label set for one run.
///
/// Renderers receive a `&Labels` explicitly; there is no global lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::struct_field_names)]
pub struct Labels {
    // General
    pub week: &'static str,
    pub session: &'static str,
    pub modality: &'static str,
    pub title: &'static str,
    pub content: &'static str,

    // Session pages
    pub objectives: &'static str,
    pub objectives_intro: &'static str,
    pub activities: &'static str,
    pub evaluation: &'static str,
    pub references: &'static str,

    // Activity skeletons
    pub description: &'static str,
    pub materials: &'static str,
    pub instructions: &'static str,
    pub default_objective: &'static str,
    pub default_material: &'static str,
    pub step: &'static str,
    pub difficulty: &'static str,

    // Program page
    pub university: &'static str,
    pub code: &'static str,
    pub semester: &'static str,
    pub methodology: &'static str,
    pub schedule: &'static str,
    pub placeholder_objectives: &'static str,
    pub placeholder_methodology: &'static str,
    pub placeholder_evaluation: &'static str,

    // Sessions table
    pub sessions_table: &'static str,

    // Activity badges
    pub badge_type: &'static str,
    pub badge_duration: &'static str,
    pub badge_modality: &'static str,
    pub badge_difficulty: &'static str,

    // Site configuration
    pub copyright_notice: &'static str,

    // Orchestrator
    pub overwrite_warning: &'static str,
    pub confirm: &'static str,
    pub abort: &'static str,
    pub success: &'static str,
    pub run_hint: &'static str,
}

impl Labels {
    /// Returns the label set for `lang`.
    #[must_use]
    pub const fn for_lang(lang: Lang) -> &'static Self {
        match lang {
            Lang::Es => &SPANISH,
            Lang::En => &ENGLISH,
            Lang::Fr => &FRENCH,
        }
    }
}

static SPANISH: Labels = Labels {
    week: "Semana",
    session: "Sesión",
    modality: "Presencial",
    title: "Título",
    content: "Contenido",

    objectives: "Objetivos",
    objectives_intro: "Al completar esta lección, serás capaz de:",
    activities: "Actividades",
    evaluation: "Evaluación",
    references: "Referencias",

    description: "Descripción",
    materials: "Materiales",
    instructions: "Instrucciones",
    default_objective: "[Definir objetivo específico de la actividad]",
    default_material: "[Lista de materiales]",
    step: "Paso",
    difficulty: "Fundamental",

    university: "Universidad",
    code: "Código",
    semester: "Semestre",
    methodology: "Metodología",
    schedule: "Cronograma",
    placeholder_objectives: "Los objetivos generales del curso se detallarán aquí.",
    placeholder_methodology: "La metodología del curso se describirá aquí.",
    placeholder_evaluation: "Las reglas de evaluación se detallarán aquí.",

    sessions_table: "Tabla de sesiones",

    badge_type: "Tipo",
    badge_duration: "Duración",
    badge_modality: "Modalidad",
    badge_difficulty: "Dificultad",

    copyright_notice: "Distribuido bajo licencia Creative Commons.",

    overwrite_warning: "⚠️  ADVERTENCIA: Estás a punto de SOBREESCRIBIR todos los archivos generados (sesiones, actividades, programa).",
    confirm: "¿Estás seguro de que deseas continuar? [y/N]: ",
    abort: "❌ Operación cancelada por el usuario.",
    success: "🎉 ¡Andamiaje del curso completado con éxito!",
    run_hint: "   Ejecuta 'myst start' para previsualizar el curso.",
};

static ENGLISH: Labels = Labels {
    week: "Week",
    session: "Session",
    modality: "In-person",
    title: "Title",
    content: "Content",

    objectives: "Objectives",
    objectives_intro: "Upon completing this lesson, you will be able to:",
    activities: "Activities",
    evaluation: "Evaluation",
    references: "References",

    description: "Description",
    materials: "Materials",
    instructions: "Instructions",
    default_objective: "[Define specific activity objective]",
    default_material: "[List of materials]",
    step: "Step",
    difficulty: "Fundamental",

    university: "University",
    code: "Code",
    semester: "Semester",
    methodology: "Methodology",
    schedule: "Schedule",
    placeholder_objectives: "General course objectives will be detailed here.",
    placeholder_methodology: "Course methodology will be described here.",
    placeholder_evaluation: "Evaluation rules will be detailed here.",

    sessions_table: "Sessions Table",

    badge_type: "Type",
    badge_duration: "Duration",
    badge_modality: "Modality",
    badge_difficulty: "Difficulty",

    copyright_notice: "Distributed under a Creative Commons license.",

    overwrite_warning: "⚠️  WARNING: You are about to OVERWRITE all generated files (sessions, activities, program).",
    confirm: "Are you sure you want to proceed? [y/N]: ",
    abort: "❌ Operation cancelled by user.",
    success: "🎉 Course scaffolding completed successfully!",
    run_hint: "   Run 'myst start' to preview the course.",
};

static FRENCH: Labels = Labels {
    week: "Semaine",
    session: "Séance",
    modality: "Présentiel",
    title: "Titre",
    content: "Contenu",

    objectives: "Objectifs",
    objectives_intro: "En complétant cette leçon, vous serez capable de :",
    activities: "Activités",
    evaluation: "Évaluation",
    references: "Références",

    description: "Description",
    materials: "Matériel",
    instructions: "Instructions",
    default_objective: "[Définir l'objectif spécifique de l'activité]",
    default_material: "[Liste du matériel]",
    step: "Étape",
    difficulty: "Fondamental",

    university: "Université",
    code: "Code",
    semester: "Semestre",
    methodology: "Méthodologie",
    schedule: "Calendrier",
    placeholder_objectives: "Les objectifs généraux du cours seront détaillés ici.",
    placeholder_methodology: "La méthodologie du cours sera décrite ici.",
    placeholder_evaluation: "Les règles d'évaluation seront détaillées ici.",

    sessions_table: "Tableau des séances",

    badge_type: "Type",
    badge_duration: "Durée",
    badge_modality: "Modalité",
    badge_difficulty: "Difficulté",

    copyright_notice: "Distribué sous licence Creative Commons.",

    overwrite_warning: "⚠️  ATTENTION : Vous êtes sur le point d'ÉCRASER tous les fichiers générés (séances, activités, programme).",
    confirm: "Êtes-vous sûr de vouloir continuer ? [y/N] : ",
    abort: "❌ Opération annulée par l'utilisateur.",
    success: "🎉 Échafaudage du cours terminé avec succès !",
    run_hint: "   Exécutez 'myst start' pour prévisualiser le cours.",
};
