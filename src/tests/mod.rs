mod collections_api_tests;
mod support;
