use serde::{Deserialize, Serialize};

/// Области, в которых волонтёр может помогать
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InterestArea {
    Education,
    Health,
    Environment,
    SocialAssistance,
    Culture,
}

impl InterestArea {
    /// Текст пункта списка; он же значение `<option>`.
    pub fn display_name(&self) -> &'static str {
        match self {
            InterestArea::Education => "Educação",
            InterestArea::Health => "Saúde",
            InterestArea::Environment => "Meio Ambiente",
            InterestArea::SocialAssistance => "Assistência Social",
            InterestArea::Culture => "Cultura",
        }
    }

    pub fn all() -> Vec<InterestArea> {
        vec![
            InterestArea::Education,
            InterestArea::Health,
            InterestArea::Environment,
            InterestArea::SocialAssistance,
            InterestArea::Culture,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_volunteer_form::{FieldKey, VolunteerForm};

    #[test]
    fn test_every_area_is_a_valid_interest() {
        for area in InterestArea::all() {
            let mut form = VolunteerForm::default();
            form.set_value(FieldKey::Interest, area.display_name().to_string());
            assert!(form.validate().interest, "{:?}", area);
        }
    }
}
