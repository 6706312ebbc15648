//! 当前语言
//!
//! 初始值依次取 LocalStorage 中的偏好、编译期配置；切换时写回 LocalStorage。

use crate::api;
use crate::web::BrowserStorage;
use leptos::prelude::*;
use teebook_admin::SessionStorage;
use teebook_shared::i18n::{Language, Messages};

const STORAGE_LANGUAGE_KEY: &str = "language";

#[derive(Clone, Copy)]
pub struct I18nContext {
    lang: RwSignal<Language>,
}

impl I18nContext {
    pub fn new() -> Self {
        let initial = BrowserStorage
            .get(STORAGE_LANGUAGE_KEY)
            .map(|code| Language::from_code(&code))
            .unwrap_or(api::config().language);
        Self {
            lang: RwSignal::new(initial),
        }
    }

    pub fn language(&self) -> Language {
        self.lang.get()
    }

    /// 订阅语言变化的文案表
    pub fn messages(&self) -> &'static Messages {
        self.lang.get().messages()
    }

    pub fn set_language(&self, lang: Language) {
        BrowserStorage.set(STORAGE_LANGUAGE_KEY, lang.code());
        self.lang.set(lang);
    }
}

pub fn use_i18n() -> I18nContext {
    use_context::<I18nContext>().expect("I18nContext should be provided")
}
