use error_stack::Report;
use time::OffsetDateTime;

use crate::transfer::{CourierDto, RegisterCourierDto, UpdateCourierDto};
use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::query::{CourierQuery, DependOnCourierQuery};
use kernel::interface::storage::{DependOnImageStorage, ImageStorage};
use kernel::interface::update::{CourierModifier, DependOnCourierModifier};
use kernel::prelude::entity::{
    BirthDate, Courier, CourierId, CourierName, DriverLicenseNumber, TaxNumber,
};
use kernel::KernelError;

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

#[async_trait::async_trait]
pub trait RegisterCourierService:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection
    + DependOnCourierQuery
    + DependOnCourierModifier
    + DependOnImageStorage
{
    async fn register_courier(
        &self,
        dto: RegisterCourierDto,
    ) -> error_stack::Result<CourierDto, KernelError> {
        if is_blank(&dto.id) {
            return Err(Report::new(KernelError::Validation)
                .attach_printable("Courier identifier is required"));
        }
        if is_blank(&dto.name) {
            return Err(
                Report::new(KernelError::Validation).attach_printable("Courier name is required")
            );
        }
        let tax_number = TaxNumber::new(dto.tax_number);
        if !tax_number.is_well_formed() {
            return Err(Report::new(KernelError::Validation).attach_printable(format!(
                "Tax number must have {} characters",
                TaxNumber::LENGTH
            )));
        }
        let birth_date = BirthDate::new(dto.birth_date);
        if !birth_date.is_adult_at(OffsetDateTime::now_utc().date()) {
            return Err(Report::new(KernelError::Validation).attach_printable(format!(
                "Courier must be at least {} years old",
                BirthDate::ADULT_AGE
            )));
        }

        let mut connection = self.database_connection().transact().await?;

        let id = CourierId::new(dto.id);
        if self
            .courier_query()
            .find_by_id(&mut connection, &id)
            .await?
            .is_some()
        {
            return Err(Report::new(KernelError::Business)
                .attach_printable("Courier identifier is already registered"));
        }
        if self
            .courier_query()
            .find_by_tax_number(&mut connection, &tax_number)
            .await?
            .is_some()
        {
            return Err(Report::new(KernelError::Business)
                .attach_printable("Tax number is already registered"));
        }
        let license_number = DriverLicenseNumber::new(dto.license_number);
        if self
            .courier_query()
            .find_by_license_number(&mut connection, &license_number)
            .await?
            .is_some()
        {
            return Err(Report::new(KernelError::Business)
                .attach_printable("Driver license number is already registered"));
        }

        let image = self
            .image_storage()
            .upload_base64(&dto.license_image_base64)
            .await?;
        let courier = Courier::new(
            id,
            CourierName::new(dto.name),
            tax_number,
            birth_date,
            license_number,
            dto.license_type,
            image.clone(),
        );

        let staged = self
            .courier_modifier()
            .create(&mut connection, courier.clone())
            .await;
        let written = connection.settle(staged).await;
        if let Err(report) = written {
            // orphaned upload
            if let Err(cleanup) = self.image_storage().remove(&image).await {
                tracing::error!(image = ?image, "failed to remove license image: {cleanup:?}");
            }
            return Err(report);
        }

        tracing::info!(courier = ?courier.id(), "courier registered");
        Ok(CourierDto::from(courier))
    }
}

impl<T> RegisterCourierService for T where
    T: DependOnDatabaseConnection
        + DependOnCourierQuery
        + DependOnCourierModifier
        + DependOnImageStorage
{
}

#[async_trait::async_trait]
pub trait UpdateCourierService:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection
    + DependOnCourierQuery
    + DependOnCourierModifier
    + DependOnImageStorage
{
    /// Fields that are absent or fail validation keep their stored value.
    async fn update_courier(
        &self,
        dto: UpdateCourierDto,
    ) -> error_stack::Result<CourierDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = CourierId::new(dto.id);
        let current = self
            .courier_query()
            .find_by_id(&mut connection, &id)
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::NotFound).attach_printable("Courier not found")
            })?
            .into_destruct();

        let license_number = match dto.license_number.filter(|number| !is_blank(number)) {
            Some(number) => {
                let number = DriverLicenseNumber::new(number);
                let holder = self
                    .courier_query()
                    .find_by_license_number(&mut connection, &number)
                    .await?;
                if holder.is_some_and(|holder| holder.id() != &id) {
                    return Err(Report::new(KernelError::Business)
                        .attach_printable("Driver license number is already registered"));
                }
                number
            }
            None => current.license_number,
        };
        let name = dto
            .name
            .filter(|name| !is_blank(name))
            .map(CourierName::new)
            .unwrap_or(current.name);
        let tax_number = dto
            .tax_number
            .map(TaxNumber::new)
            .filter(TaxNumber::is_well_formed)
            .unwrap_or(current.tax_number);
        let today = OffsetDateTime::now_utc().date();
        let birth_date = dto
            .birth_date
            .map(BirthDate::new)
            .filter(|birth_date| birth_date.is_adult_at(today))
            .unwrap_or(current.birth_date);
        let license_type = dto.license_type.or(current.license_type);

        let replaced = match dto.license_image_base64.filter(|image| !is_blank(image)) {
            Some(content) => Some(self.image_storage().upload_base64(&content).await?),
            None => None,
        };
        let license_image = replaced.clone().unwrap_or_else(|| current.license_image.clone());

        let courier = Courier::new(
            current.id,
            name,
            tax_number,
            birth_date,
            license_number,
            license_type,
            license_image,
        );

        let staged = self
            .courier_modifier()
            .update(&mut connection, courier.clone())
            .await;
        let written = connection.settle(staged).await;
        match (written, replaced) {
            (Err(report), Some(uploaded)) => {
                if let Err(cleanup) = self.image_storage().remove(&uploaded).await {
                    tracing::error!(image = ?uploaded, "failed to remove license image: {cleanup:?}");
                }
                return Err(report);
            }
            (Err(report), None) => return Err(report),
            (Ok(()), Some(_)) => {
                if let Err(report) = self.image_storage().remove(&current.license_image).await {
                    tracing::error!(image = ?current.license_image, "failed to remove replaced license image: {report:?}");
                }
            }
            (Ok(()), None) => {}
        }

        tracing::info!(courier = ?courier.id(), "courier updated");
        Ok(CourierDto::from(courier))
    }
}

impl<T> UpdateCourierService for T where
    T: DependOnDatabaseConnection
        + DependOnCourierQuery
        + DependOnCourierModifier
        + DependOnImageStorage
{
}
