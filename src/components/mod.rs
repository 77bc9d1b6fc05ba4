pub mod accessibility_bar;
pub mod course_tabs;
pub mod footer;
pub mod navbar;
pub mod rating_summary;
pub mod review_form;
pub mod reviews_list;
pub mod reviews_widget;
pub mod star_rating;
