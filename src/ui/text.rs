use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ru,
}

impl Locale {
    pub fn labels(self) -> &'static Labels {
        match self {
            Locale::En => &EN,
            Locale::Ru => &RU,
        }
    }
}

/// Every user-facing string of the dashboard.
pub struct Labels {
    pub app_title: &'static str,
    pub app_subtitle: &'static str,
    pub refresh: &'static str,

    pub total_subscribers: &'static str,
    pub active_count: &'static str,
    pub total_broadcasts: &'static str,
    pub sent_count: &'static str,
    pub delivered_title: &'static str,
    pub delivered_caption: &'static str,
    pub failed_title: &'static str,
    pub failed_caption: &'static str,

    pub tab_broadcast: &'static str,
    pub tab_history: &'static str,
    pub tab_subscribers: &'static str,

    pub compose_title: &'static str,
    pub compose_description: &'static str,
    pub compose_hint: &'static str,
    pub recipients: &'static str,
    pub send_button: &'static str,
    pub sending: &'static str,

    pub history_title: &'static str,
    pub history_description: &'static str,
    pub no_messages: &'static str,
    pub status_sent: &'static str,
    pub status_draft: &'static str,

    pub subscribers_title: &'static str,
    pub subscribers_description: &'static str,
    pub no_subscribers: &'static str,
    pub active: &'static str,
    pub inactive: &'static str,

    pub notice_empty_message: &'static str,
    pub notice_load_failed: &'static str,
    pub notice_send_succeeded: &'static str,
    pub notice_send_failed: &'static str,
}

pub static EN: Labels = Labels {
    app_title: "Telegram Bot Admin",
    app_subtitle: "Manage broadcasts and subscribers",
    refresh: "Refresh",

    total_subscribers: "Total subscribers",
    active_count: "Active",
    total_broadcasts: "Total broadcasts",
    sent_count: "Sent",
    delivered_title: "Successful deliveries",
    delivered_caption: "Delivered",
    failed_title: "Delivery errors",
    failed_caption: "Not delivered",

    tab_broadcast: "Broadcast",
    tab_history: "History",
    tab_subscribers: "Subscribers",

    compose_title: "Create broadcast",
    compose_description: "Send a message to every active subscriber of the bot",
    compose_hint: "Enter message text...",
    recipients: "Recipients",
    send_button: "Send broadcast",
    sending: "Sending...",

    history_title: "Broadcast history",
    history_description: "All sent and draft messages",
    no_messages: "No messages",
    status_sent: "Sent",
    status_draft: "Draft",

    subscribers_title: "Subscribers",
    subscribers_description: "Every user of the bot",
    no_subscribers: "No subscribers",
    active: "Active",
    inactive: "Inactive",

    notice_empty_message: "Enter the message text",
    notice_load_failed: "Error loading data",
    notice_send_succeeded: "Broadcast sent!",
    notice_send_failed: "Error sending broadcast",
};

pub static RU: Labels = Labels {
    app_title: "Telegram Bot Admin",
    app_subtitle: "Управление рассылками и подписчиками",
    refresh: "Обновить",

    total_subscribers: "Всего подписчиков",
    active_count: "Активных",
    total_broadcasts: "Всего рассылок",
    sent_count: "Отправлено",
    delivered_title: "Успешных доставок",
    delivered_caption: "Доставлено",
    failed_title: "Ошибок доставки",
    failed_caption: "Не доставлено",

    tab_broadcast: "Рассылка",
    tab_history: "История",
    tab_subscribers: "Подписчики",

    compose_title: "Создать рассылку",
    compose_description: "Отправьте сообщение всем активным подписчикам бота",
    compose_hint: "Введите текст сообщения...",
    recipients: "Получателей",
    send_button: "Отправить рассылку",
    sending: "Отправка...",

    history_title: "История рассылок",
    history_description: "Все отправленные и черновые сообщения",
    no_messages: "Нет сообщений",
    status_sent: "Отправлено",
    status_draft: "Черновик",

    subscribers_title: "Подписчики",
    subscribers_description: "Список всех пользователей бота",
    no_subscribers: "Нет подписчиков",
    active: "Активен",
    inactive: "Неактивен",

    notice_empty_message: "Введите текст сообщения",
    notice_load_failed: "Ошибка загрузки данных",
    notice_send_succeeded: "Рассылка отправлена!",
    notice_send_failed: "Ошибка отправки",
};
