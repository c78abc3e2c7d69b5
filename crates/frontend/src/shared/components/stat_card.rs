use crate::shared::icons::icon;
use leptos::prelude::*;

/// Visual accent for a stat card.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum StatTone {
    Primary,
    Success,
    Warning,
    Danger,
}

impl StatTone {
    fn class(&self) -> &'static str {
        match self {
            StatTone::Primary => "stat-card stat-card--primary",
            StatTone::Success => "stat-card stat-card--success",
            StatTone::Warning => "stat-card stat-card--warning",
            StatTone::Danger => "stat-card stat-card--danger",
        }
    }
}

/// Summary counter card. Counters always describe the whole resource, not
/// the current filter view, so the value comes from the raw collection.
#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: String,
    /// Icon name from the icon() helper
    icon_name: String,
    /// Counter value (None = still loading)
    #[prop(into)]
    value: Signal<Option<i64>>,
    /// Visual accent
    tone: StatTone,
) -> impl IntoView {
    let formatted = move || match value.get() {
        Some(v) => v.to_string(),
        None => "\u{2014}".to_string(),
    };

    view! {
        <div class=tone.class()>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{formatted}</div>
            </div>
            <div class="stat-card__icon">
                {icon(&icon_name)}
            </div>
        </div>
    }
}
