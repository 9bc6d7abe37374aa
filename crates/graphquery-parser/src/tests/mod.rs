mod graphql_parser_document_tests;
mod graphql_parser_operation_tests;
mod graphql_parser_selection_tests;
mod source_position_tests;
mod utils;
