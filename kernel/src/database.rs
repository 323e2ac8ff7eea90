use crate::KernelError;

#[async_trait::async_trait]
pub trait DatabaseConnection: 'static + Sync + Send {
    type Transaction: Transaction;
    async fn transact(&self) -> error_stack::Result<Self::Transaction, KernelError>;
}

pub trait DependOnDatabaseConnection: 'static + Sync + Send {
    type DatabaseConnection: DatabaseConnection;
    fn database_connection(&self) -> &Self::DatabaseConnection;
}

impl<T> DependOnDatabaseConnection for T
where
    T: DatabaseConnection,
{
    type DatabaseConnection = T;
    fn database_connection(&self) -> &Self::DatabaseConnection {
        self
    }
}

/// Writes issued through a transaction become visible only after [`Transaction::commit`].
/// Dropping a transaction without committing discards them.
#[async_trait::async_trait]
pub trait Transaction: 'static + Sync + Send + Sized {
    async fn commit(self) -> error_stack::Result<(), KernelError>;
    async fn roll_back(self) -> error_stack::Result<(), KernelError>;

    /// Commits when every staged write was accepted. Otherwise rolls back and returns the
    /// write failure, noting a failed roll back on it.
    async fn settle(
        self,
        staged: error_stack::Result<(), KernelError>,
    ) -> error_stack::Result<(), KernelError> {
        match staged {
            Ok(()) => self.commit().await,
            Err(report) => match self.roll_back().await {
                Ok(()) => Err(report),
                Err(rollback) => Err(report.attach_printable(format!(
                    "Roll back failed as well: {:?}",
                    rollback.current_context()
                ))),
            },
        }
    }
}
