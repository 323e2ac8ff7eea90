use std::ops::Deref;
use std::sync::Arc;

use kernel::interface::catalog::{DependOnRentContractCatalog, RentContractCatalog};
use kernel::interface::database::DependOnDatabaseConnection;
use kernel::interface::event::DependOnVehicleEventPublisher;
use kernel::interface::pricing::{DependOnRentPricingCalculator, StandardRentPricing};
use kernel::interface::query::{DependOnCourierQuery, DependOnRentQuery, DependOnVehicleQuery};
use kernel::interface::storage::DependOnImageStorage;
use kernel::interface::update::{
    DependOnCourierModifier, DependOnRentModifier, DependOnVehicleModifier,
};
use kernel::KernelError;

use crate::config::load_rent_contract_catalog;
use crate::database::{
    InMemoryCourierRepository, InMemoryDatabase, InMemoryRentRepository,
    InMemoryVehicleRepository,
};
use crate::messaging::ChannelVehicleEventPublisher;
use crate::storage::InMemoryImageStorage;

#[derive(Clone)]
pub struct AppModule(Arc<Handler>);

impl AppModule {
    /// Wires the module with the rent contracts from the environment configuration.
    pub fn new() -> error_stack::Result<Self, KernelError> {
        Ok(Self::with_catalog(load_rent_contract_catalog()?))
    }

    pub fn with_catalog(catalog: RentContractCatalog) -> Self {
        Self(Arc::new(Handler::init(catalog)))
    }
}

impl Deref for AppModule {
    type Target = Handler;
    fn deref(&self) -> &Self::Target {
        Deref::deref(&self.0)
    }
}

pub struct Handler {
    database: InMemoryDatabase,
    catalog: RentContractCatalog,
    pricing: StandardRentPricing,
    image_storage: InMemoryImageStorage,
    publisher: ChannelVehicleEventPublisher,
}

impl Handler {
    pub fn init(catalog: RentContractCatalog) -> Self {
        Self {
            database: InMemoryDatabase::new(),
            catalog,
            pricing: StandardRentPricing,
            image_storage: InMemoryImageStorage::new(),
            publisher: ChannelVehicleEventPublisher::default(),
        }
    }
}

impl DependOnDatabaseConnection for Handler {
    type DatabaseConnection = InMemoryDatabase;
    fn database_connection(&self) -> &Self::DatabaseConnection {
        &self.database
    }
}

impl DependOnVehicleQuery for Handler {
    type VehicleQuery = InMemoryVehicleRepository;
    fn vehicle_query(&self) -> &Self::VehicleQuery {
        &InMemoryVehicleRepository
    }
}

impl DependOnVehicleModifier for Handler {
    type VehicleModifier = InMemoryVehicleRepository;
    fn vehicle_modifier(&self) -> &Self::VehicleModifier {
        &InMemoryVehicleRepository
    }
}

impl DependOnCourierQuery for Handler {
    type CourierQuery = InMemoryCourierRepository;
    fn courier_query(&self) -> &Self::CourierQuery {
        &InMemoryCourierRepository
    }
}

impl DependOnCourierModifier for Handler {
    type CourierModifier = InMemoryCourierRepository;
    fn courier_modifier(&self) -> &Self::CourierModifier {
        &InMemoryCourierRepository
    }
}

impl DependOnRentQuery for Handler {
    type RentQuery = InMemoryRentRepository;
    fn rent_query(&self) -> &Self::RentQuery {
        &InMemoryRentRepository
    }
}

impl DependOnRentModifier for Handler {
    type RentModifier = InMemoryRentRepository;
    fn rent_modifier(&self) -> &Self::RentModifier {
        &InMemoryRentRepository
    }
}

impl DependOnRentContractCatalog for Handler {
    fn rent_contract_catalog(&self) -> &RentContractCatalog {
        &self.catalog
    }
}

impl DependOnRentPricingCalculator for Handler {
    type RentPricingCalculator = StandardRentPricing;
    fn rent_pricing_calculator(&self) -> &Self::RentPricingCalculator {
        &self.pricing
    }
}

impl DependOnImageStorage for Handler {
    type ImageStorage = InMemoryImageStorage;
    fn image_storage(&self) -> &Self::ImageStorage {
        &self.image_storage
    }
}

impl DependOnVehicleEventPublisher for Handler {
    type VehicleEventPublisher = ChannelVehicleEventPublisher;
    fn vehicle_event_publisher(&self) -> &Self::VehicleEventPublisher {
        &self.publisher
    }
}
