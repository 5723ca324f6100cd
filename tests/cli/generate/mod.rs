mod fails_without_built_jar_contract;
mod json_summary_contract;
mod keeps_base_token_literal_contract;
mod produces_service_bundle_contract;
mod regenerates_identically_contract;
mod warns_on_missing_directory_contract;
