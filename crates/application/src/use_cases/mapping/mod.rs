mod build_hostname_mapping;

pub use build_hostname_mapping::BuildHostnameMappingUseCase;
