#![allow(missing_docs)]

pub(crate) mod app;
pub(crate) mod html;
pub(crate) mod http;

pub(crate) use app::{
    TEST_PASSWORD, create_test_transaction, create_test_user, get_test_server, log_in_test_user,
    transaction_store, user_store,
};
pub(crate) use html::{assert_valid_html, parse_html_document};
pub(crate) use http::assert_field_error;
