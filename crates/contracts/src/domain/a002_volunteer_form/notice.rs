use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Вид уведомления над формой
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoticeKind {
    Success,
    Danger,
}

impl NoticeKind {
    pub fn class(&self) -> &'static str {
        match self {
            NoticeKind::Success => "alert alert-success",
            NoticeKind::Danger => "alert alert-danger",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            NoticeKind::Success => "\u{2713}",
            NoticeKind::Danger => "\u{26A0}",
        }
    }

    pub fn headline(&self) -> &'static str {
        match self {
            NoticeKind::Success => "Sucesso!",
            NoticeKind::Danger => "Erro!",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            NoticeKind::Success => "Seu cadastro foi enviado! Você receberá um e-mail em breve.",
            NoticeKind::Danger => "Por favor, preencha todos os campos obrigatórios corretamente.",
        }
    }
}

/// A notice currently shown on the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub id: Uuid,
    pub kind: NoticeKind,
}

impl Notice {
    pub fn new(kind: NoticeKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
        }
    }
}
