//! 界面文案（法语 / 英语）
//!
//! 只覆盖导航、认证、守卫视图、仪表盘与通知文本，其余页面文案为英文常量。

use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    Fr,
    En,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Fr, Language::En];

    /// 无法识别的代码回落到默认语言
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" | "en-us" | "en-gb" => Language::En,
            _ => Language::Fr,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::Fr => "fr",
            Language::En => "en",
        }
    }

    pub fn messages(&self) -> &'static Messages {
        match self {
            Language::Fr => &FR,
            Language::En => &EN,
        }
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

// =========================================================
// 通知 (Notices)
// =========================================================

/// 页面操作结果对应的通知类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    LoadFailed,
    Created,
    CreateFailed,
    Updated,
    UpdateFailed,
    Deleted,
    DeleteFailed,
    /// 表单未通过客户端校验，未发起请求
    Invalid,
}

impl NoticeKind {
    pub fn is_error(&self) -> bool {
        !matches!(self, NoticeKind::Created | NoticeKind::Updated | NoticeKind::Deleted)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Dashboard,
    User,
    Course,
    TeeTime,
    Booking,
    Competition,
}

impl EntityKind {
    fn noun(&self, lang: Language) -> &'static str {
        match (lang, self) {
            (Language::Fr, EntityKind::Dashboard) => "tableau de bord",
            (Language::Fr, EntityKind::User) => "utilisateur",
            (Language::Fr, EntityKind::Course) => "parcours",
            (Language::Fr, EntityKind::TeeTime) => "départ",
            (Language::Fr, EntityKind::Booking) => "réservation",
            (Language::Fr, EntityKind::Competition) => "compétition",
            (Language::En, EntityKind::Dashboard) => "dashboard",
            (Language::En, EntityKind::User) => "user",
            (Language::En, EntityKind::Course) => "course",
            (Language::En, EntityKind::TeeTime) => "tee time",
            (Language::En, EntityKind::Booking) => "booking",
            (Language::En, EntityKind::Competition) => "competition",
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// 通知正文；`detail` 为服务端或校验给出的附加说明
pub fn notice_text(lang: Language, entity: EntityKind, kind: NoticeKind, detail: Option<&str>) -> String {
    let noun = entity.noun(lang);
    let headline = match (lang, kind) {
        (Language::Fr, NoticeKind::LoadFailed) => "Échec du chargement des données".to_string(),
        (Language::Fr, NoticeKind::Created) => format!("{} créé(e) avec succès", capitalize(noun)),
        (Language::Fr, NoticeKind::CreateFailed) => format!("Échec de la création : {noun}"),
        (Language::Fr, NoticeKind::Updated) => format!("{} mis(e) à jour avec succès", capitalize(noun)),
        (Language::Fr, NoticeKind::UpdateFailed) => format!("Échec de la mise à jour : {noun}"),
        (Language::Fr, NoticeKind::Deleted) => format!("{} supprimé(e) avec succès", capitalize(noun)),
        (Language::Fr, NoticeKind::DeleteFailed) => format!("Échec de la suppression : {noun}"),
        (Language::Fr, NoticeKind::Invalid) => "Formulaire invalide".to_string(),
        (Language::En, NoticeKind::LoadFailed) => "Failed to load data".to_string(),
        (Language::En, NoticeKind::Created) => format!("{} created successfully", capitalize(noun)),
        (Language::En, NoticeKind::CreateFailed) => format!("Failed to create {noun}"),
        (Language::En, NoticeKind::Updated) => format!("{} updated successfully", capitalize(noun)),
        (Language::En, NoticeKind::UpdateFailed) => format!("Failed to update {noun}"),
        (Language::En, NoticeKind::Deleted) => format!("{} deleted successfully", capitalize(noun)),
        (Language::En, NoticeKind::DeleteFailed) => format!("Failed to delete {noun}"),
        (Language::En, NoticeKind::Invalid) => "Invalid form".to_string(),
    };

    match detail.map(str::trim).filter(|d| !d.is_empty()) {
        Some(detail) => format!("{headline} ({detail})"),
        None => headline,
    }
}

// =========================================================
// 文案表 (Message Tables)
// =========================================================

#[derive(Debug)]
pub struct NavMessages {
    pub dashboard: &'static str,
    pub users: &'static str,
    pub courses: &'static str,
    pub tee_times: &'static str,
    pub bookings: &'static str,
    pub competitions: &'static str,
}

#[derive(Debug)]
pub struct AuthMessages {
    pub sign_in: &'static str,
    pub signing_in: &'static str,
    pub register: &'static str,
    pub registering: &'static str,
    pub email: &'static str,
    pub password: &'static str,
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub handicap_index: &'static str,
    pub no_account: &'static str,
    pub register_here: &'static str,
    pub have_account: &'static str,
    pub sign_in_here: &'static str,
    pub logout: &'static str,
    pub login_success: &'static str,
    pub login_failed: &'static str,
    pub register_success: &'static str,
    pub register_failed: &'static str,
}

#[derive(Debug)]
pub struct GuardMessages {
    pub loading: &'static str,
    pub access_denied_title: &'static str,
    pub access_denied_body: &'static str,
}

#[derive(Debug)]
pub struct DashboardMessages {
    pub title: &'static str,
    pub description: &'static str,
    pub total_users: &'static str,
    pub active_users: &'static str,
    pub retention_rate: &'static str,
    pub total_bookings: &'static str,
    pub revenue: &'static str,
    pub revenue_estimate_note: &'static str,
    pub bookings_by_time: &'static str,
    pub morning: &'static str,
    pub afternoon: &'static str,
    pub evening: &'static str,
    pub course_status: &'static str,
    pub courses_open: &'static str,
    pub courses_closed: &'static str,
    pub courses_maintenance: &'static str,
    pub quick_stats: &'static str,
    pub golf_courses: &'static str,
    pub active_subscriptions: &'static str,
    pub competitions: &'static str,
}

#[derive(Debug)]
pub struct Messages {
    pub app_name: &'static str,
    pub admin_panel: &'static str,
    pub welcome_back: &'static str,
    pub cancel: &'static str,
    pub save: &'static str,
    pub language: &'static str,
    pub nav: NavMessages,
    pub auth: AuthMessages,
    pub guard: GuardMessages,
    pub dashboard: DashboardMessages,
}

pub static FR: Messages = Messages {
    app_name: "TeeBook",
    admin_panel: "Panneau d'administration",
    welcome_back: "Bon retour",
    cancel: "Annuler",
    save: "Enregistrer",
    language: "Langue",
    nav: NavMessages {
        dashboard: "Tableau de bord",
        users: "Utilisateurs",
        courses: "Parcours",
        tee_times: "Départs",
        bookings: "Réservations",
        competitions: "Compétitions",
    },
    auth: AuthMessages {
        sign_in: "Se connecter",
        signing_in: "Connexion...",
        register: "Créer un compte",
        registering: "Création...",
        email: "E-mail",
        password: "Mot de passe",
        first_name: "Prénom",
        last_name: "Nom",
        handicap_index: "Index",
        no_account: "Pas encore de compte ?",
        register_here: "Inscrivez-vous",
        have_account: "Déjà inscrit ?",
        sign_in_here: "Connectez-vous",
        logout: "Déconnexion",
        login_success: "Connexion réussie",
        login_failed: "Échec de la connexion",
        register_success: "Compte créé avec succès",
        register_failed: "Échec de l'inscription",
    },
    guard: GuardMessages {
        loading: "Chargement...",
        access_denied_title: "Accès refusé",
        access_denied_body: "Cet espace est réservé aux administrateurs.",
    },
    dashboard: DashboardMessages {
        title: "Tableau de bord",
        description: "Vue d'ensemble de l'activité",
        total_users: "Utilisateurs",
        active_users: "Utilisateurs actifs",
        retention_rate: "Taux de rétention",
        total_bookings: "Réservations",
        revenue: "Revenus",
        revenue_estimate_note: "Estimation",
        bookings_by_time: "Réservations par créneau",
        morning: "Matin",
        afternoon: "Après-midi",
        evening: "Soir",
        course_status: "État des parcours",
        courses_open: "Ouverts",
        courses_closed: "Fermés",
        courses_maintenance: "En maintenance",
        quick_stats: "Statistiques rapides",
        golf_courses: "Parcours de golf",
        active_subscriptions: "Abonnements actifs",
        competitions: "Compétitions à venir",
    },
};

pub static EN: Messages = Messages {
    app_name: "TeeBook",
    admin_panel: "Admin Panel",
    welcome_back: "Welcome back",
    cancel: "Cancel",
    save: "Save changes",
    language: "Language",
    nav: NavMessages {
        dashboard: "Dashboard",
        users: "Users",
        courses: "Courses",
        tee_times: "Tee Times",
        bookings: "Bookings",
        competitions: "Competitions",
    },
    auth: AuthMessages {
        sign_in: "Sign in",
        signing_in: "Signing in...",
        register: "Create account",
        registering: "Creating...",
        email: "Email",
        password: "Password",
        first_name: "First name",
        last_name: "Last name",
        handicap_index: "Handicap index",
        no_account: "Don't have an account?",
        register_here: "Register here",
        have_account: "Already registered?",
        sign_in_here: "Sign in here",
        logout: "Logout",
        login_success: "Login successful",
        login_failed: "Login failed",
        register_success: "Account created",
        register_failed: "Registration failed",
    },
    guard: GuardMessages {
        loading: "Loading...",
        access_denied_title: "Access denied",
        access_denied_body: "This area is restricted to administrators.",
    },
    dashboard: DashboardMessages {
        title: "Dashboard",
        description: "Activity overview",
        total_users: "Total users",
        active_users: "Active users",
        retention_rate: "Retention rate",
        total_bookings: "Total bookings",
        revenue: "Revenue",
        revenue_estimate_note: "Estimate",
        bookings_by_time: "Bookings by time slot",
        morning: "Morning",
        afternoon: "Afternoon",
        evening: "Evening",
        course_status: "Course status",
        courses_open: "Open",
        courses_closed: "Closed",
        courses_maintenance: "Maintenance",
        quick_stats: "Quick stats",
        golf_courses: "Golf courses",
        active_subscriptions: "Active subscriptions",
        competitions: "Upcoming competitions",
    },
};

impl NavMessages {
    pub fn label(&self, route: crate::route::AppRoute) -> &'static str {
        use crate::route::AppRoute;
        match route {
            AppRoute::Dashboard => self.dashboard,
            AppRoute::Users => self.users,
            AppRoute::Courses => self.courses,
            AppRoute::TeeTimes => self.tee_times,
            AppRoute::Bookings => self.bookings,
            AppRoute::Competitions => self.competitions,
            AppRoute::Login | AppRoute::Register => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_codes() {
        assert_eq!(Language::default(), Language::Fr);
        assert_eq!(Language::from_code("EN"), Language::En);
        assert_eq!(Language::from_code("de"), Language::Fr);
        for lang in Language::ALL {
            assert_eq!(Language::from_code(lang.code()), lang);
        }
    }

    #[test]
    fn test_notice_text_with_and_without_detail() {
        assert_eq!(
            notice_text(Language::En, EntityKind::Course, NoticeKind::Deleted, None),
            "Course deleted successfully"
        );
        assert_eq!(
            notice_text(
                Language::En,
                EntityKind::TeeTime,
                NoticeKind::CreateFailed,
                Some("Course not found")
            ),
            "Failed to create tee time (Course not found)"
        );
        assert_eq!(
            notice_text(Language::Fr, EntityKind::User, NoticeKind::Updated, Some("  ")),
            "Utilisateur mis(e) à jour avec succès"
        );
    }

    #[test]
    fn test_notice_error_classification() {
        assert!(NoticeKind::LoadFailed.is_error());
        assert!(NoticeKind::Invalid.is_error());
        assert!(!NoticeKind::Created.is_error());
    }
}
