/*
 * Copyright 2025 Security Union LLC
 * Licensed under MIT OR Apache-2.0
 */

//! Display strings for the attendee list.

/// Supported display locales. Brazilian Portuguese is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Locale {
    #[default]
    PtBr,
    En,
}

impl Locale {
    /// Resolve a BCP 47 tag such as `"pt-BR"` or `"en-US"`.
    /// Unknown tags fall back to the default locale.
    pub fn from_tag(tag: &str) -> Self {
        let lang = tag
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match lang.as_str() {
            "en" => Locale::En,
            "pt" => Locale::PtBr,
            _ => {
                log::warn!("Unsupported locale {tag:?}, falling back to pt-BR");
                Locale::default()
            }
        }
    }

    pub fn labels(self) -> &'static Labels {
        match self {
            Locale::PtBr => &PT_BR,
            Locale::En => &EN,
        }
    }
}

#[derive(Debug)]
pub struct Labels {
    pub title: &'static str,
    pub search_placeholder: &'static str,
    pub id_column: &'static str,
    pub attendee_column: &'static str,
    pub signed_up_column: &'static str,
    pub checked_in_column: &'static str,
    pub not_checked_in: &'static str,
    pub empty: &'static str,
    pub retry: &'static str,
    pub load_failed: &'static str,
    pub first_page: &'static str,
    pub previous_page: &'static str,
    pub next_page: &'static str,
    pub last_page: &'static str,
    pub select_all: &'static str,
    pub more_actions: &'static str,
    showing: fn(usize, u64) -> String,
    page_of: fn(u32, u64) -> String,
}

impl Labels {
    /// Footer summary, e.g. "Mostrando 10 de 35 itens".
    pub fn showing(&self, shown: usize, total: u64) -> String {
        (self.showing)(shown, total)
    }

    /// Footer page indicator, e.g. "Página 1 de 4".
    pub fn page_of(&self, page: u32, total_pages: u64) -> String {
        (self.page_of)(page, total_pages)
    }
}

static PT_BR: Labels = Labels {
    title: "Participantes",
    search_placeholder: "Buscar participantes",
    id_column: "Código",
    attendee_column: "Participante",
    signed_up_column: "Data de inscrição",
    checked_in_column: "Data do check-in",
    not_checked_in: "Não fez check-in",
    empty: "Nenhum participante encontrado",
    retry: "Tentar novamente",
    load_failed: "Não foi possível carregar os participantes",
    first_page: "Primeira página",
    previous_page: "Página anterior",
    next_page: "Próxima página",
    last_page: "Última página",
    select_all: "Selecionar todos",
    more_actions: "Mais ações",
    showing: |shown, total| format!("Mostrando {shown} de {total} itens"),
    page_of: |page, total_pages| format!("Página {page} de {total_pages}"),
};

static EN: Labels = Labels {
    title: "Attendees",
    search_placeholder: "Search attendees",
    id_column: "Code",
    attendee_column: "Attendee",
    signed_up_column: "Signed up",
    checked_in_column: "Checked in",
    not_checked_in: "Has not checked in",
    empty: "No attendees found",
    retry: "Retry",
    load_failed: "Could not load attendees",
    first_page: "First page",
    previous_page: "Previous page",
    next_page: "Next page",
    last_page: "Last page",
    select_all: "Select all",
    more_actions: "More actions",
    showing: |shown, total| format!("Showing {shown} of {total} items"),
    page_of: |page, total_pages| format!("Page {page} of {total_pages}"),
};
