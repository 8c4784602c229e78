use std::{fmt, str::FromStr};

use anyhow::anyhow;
use serde::Serialize;
use serde_json::{Map, Value};

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Locale {
    Ko,
    En,
}

pub(crate) const DEFAULT_LOCALE: Locale = Locale::En;

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::Ko, Locale::En];

    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::Ko => "ko",
            Locale::En => "en",
        }
    }

    /// Name of the language written in that language.
    pub fn language_name(&self) -> &'static str {
        match self {
            Locale::Ko => "한국어",
            Locale::En => "English",
        }
    }

    /// Language tag used for `hreflang` alternates.
    pub fn hreflang(&self) -> &'static str {
        match self {
            Locale::Ko => "ko-KR",
            Locale::En => "en-US",
        }
    }

    /// Every UI string of this locale, keyed by its dotted name.
    pub fn ui_strings(&self) -> Map<String, Value> {
        UiKey::ALL
            .iter()
            .map(|key| (key.as_str().to_string(), Value::from(ui(*self, *key))))
            .collect()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ko" => Ok(Locale::Ko),
            "en" => Ok(Locale::En),
            _ => Err(anyhow!("unknown locale: {s}")),
        }
    }
}

pub(crate) fn is_valid_locale(lang: &str) -> bool {
    lang.parse::<Locale>().is_ok()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum UiKey {
    Title,
    Description,
    NavHome,
    NavAbout,
    SrSocialLinkedin,
    SrSocialGithub,
    LanguageSelectLabel,
    ThemeSelectLabel,
    ThemeSelectDark,
    ThemeSelectLight,
    ThemeSelectAuto,
    BlogLastUpdatedOn,
    BlogTableOfContents,
    BlogOverview,
}

impl UiKey {
    pub const ALL: [UiKey; 14] = [
        UiKey::Title,
        UiKey::Description,
        UiKey::NavHome,
        UiKey::NavAbout,
        UiKey::SrSocialLinkedin,
        UiKey::SrSocialGithub,
        UiKey::LanguageSelectLabel,
        UiKey::ThemeSelectLabel,
        UiKey::ThemeSelectDark,
        UiKey::ThemeSelectLight,
        UiKey::ThemeSelectAuto,
        UiKey::BlogLastUpdatedOn,
        UiKey::BlogTableOfContents,
        UiKey::BlogOverview,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UiKey::Title => "title",
            UiKey::Description => "description",
            UiKey::NavHome => "nav.home",
            UiKey::NavAbout => "nav.about",
            UiKey::SrSocialLinkedin => "sr.social.linkedin",
            UiKey::SrSocialGithub => "sr.social.github",
            UiKey::LanguageSelectLabel => "languageSelect.accessibleLabel",
            UiKey::ThemeSelectLabel => "themeSelect.accessibleLabel",
            UiKey::ThemeSelectDark => "themeSelect.dark",
            UiKey::ThemeSelectLight => "themeSelect.light",
            UiKey::ThemeSelectAuto => "themeSelect.auto",
            UiKey::BlogLastUpdatedOn => "blog.lastUpdatedOn",
            UiKey::BlogTableOfContents => "blog.tableOfContents",
            UiKey::BlogOverview => "blog.overview",
        }
    }
}

fn ui(locale: Locale, key: UiKey) -> &'static str {
    match locale {
        Locale::Ko => match key {
            UiKey::Title => "imhonglu's blog",
            UiKey::Description => "TypeScript 생태계, 웹 성능 최적화, 그리고 개발 이야기",
            UiKey::NavHome => "블로그",
            UiKey::NavAbout => "소개",
            UiKey::SrSocialLinkedin => "imhonglu의 링크드인 프로필로 이동하기",
            UiKey::SrSocialGithub => "imhonglu의 깃허브 프로필로 이동하기",
            UiKey::LanguageSelectLabel => "언어 선택",
            UiKey::ThemeSelectLabel => "테마 선택",
            UiKey::ThemeSelectDark => "어두운",
            UiKey::ThemeSelectLight => "밝은",
            UiKey::ThemeSelectAuto => "자동",
            UiKey::BlogLastUpdatedOn => "마지막 업데이트",
            UiKey::BlogTableOfContents => "목차",
            UiKey::BlogOverview => "개요",
        },
        Locale::En => match key {
            UiKey::Title => "imhonglu's blog",
            UiKey::Description => "Writing about TypeScript Ecosystem and Modern Web Development",
            UiKey::NavHome => "Blog",
            UiKey::NavAbout => "About",
            UiKey::SrSocialLinkedin => "Go to imhonglu's LinkedIn profile",
            UiKey::SrSocialGithub => "Go to imhonglu's GitHub profile",
            UiKey::LanguageSelectLabel => "Language Select",
            UiKey::ThemeSelectLabel => "Theme Select",
            UiKey::ThemeSelectDark => "Dark",
            UiKey::ThemeSelectLight => "Light",
            UiKey::ThemeSelectAuto => "Auto",
            UiKey::BlogLastUpdatedOn => "Last updated on",
            UiKey::BlogTableOfContents => "Table of Contents",
            UiKey::BlogOverview => "Overview",
        },
    }
}

/// Returns a lookup for the given locale. Missing or unknown locales fall
/// back to [`DEFAULT_LOCALE`].
pub(crate) fn use_translations(locale: Option<&str>) -> impl Fn(UiKey) -> &'static str {
    let locale = locale
        .and_then(|l| l.parse::<Locale>().ok())
        .unwrap_or(DEFAULT_LOCALE);
    move |key| ui(locale, key)
}
