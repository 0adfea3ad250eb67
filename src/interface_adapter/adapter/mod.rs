pub mod profile_adapter_factory;
