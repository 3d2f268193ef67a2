pub mod alert;
pub mod confirmation;
pub mod empty_state;
pub mod form;
pub mod help_bar;
pub mod help_popup;
pub mod popup;
pub mod screen_title;
pub mod section_detail;
pub mod stats_detail;
pub mod summary_card;
