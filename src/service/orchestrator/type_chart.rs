use crate::{
    config::Pacing,
    error::{analysis::AnalysisError, Error},
    model::type_chart::TypeChart,
    pokeapi::PokeApiClient,
    service::retry::RetryContext,
};

/// Types listed by the catalog that never appear in battle
const NON_BATTLE_TYPES: &[&str] = &["unknown", "shadow"];

/// Orchestrator for building the type chart from the type endpoints
pub struct TypeChartOrchestrator<'a> {
    client: &'a PokeApiClient,
    retry: &'a RetryContext,
}

impl<'a> TypeChartOrchestrator<'a> {
    pub fn new(client: &'a PokeApiClient, retry: &'a RetryContext) -> Self {
        Self { client, retry }
    }

    /// Build the type chart with one request per battle type.
    ///
    /// Requests are spaced by `pacing.type_request_pause`.
    ///
    /// # Returns
    /// - `Ok(TypeChart)` - Damage relations for every battle type
    /// - `Err(Error::AnalysisError)` - The catalog listed no battle types
    /// - `Err(Error)` - The type list or a type record could not be fetched
    pub async fn build_type_chart(&self, pacing: &Pacing) -> Result<TypeChart, Error> {
        let type_list = self
            .retry
            .execute_with_retry("type list", || self.client.get_type_list())
            .await?;

        let mut type_chart = TypeChart::new();

        for type_ref in type_list
            .results
            .iter()
            .filter(|t| !NON_BATTLE_TYPES.contains(&t.name.as_str()))
        {
            let name = type_ref.name.as_str();
            let description = format!("type {}", name);

            let detail = self
                .retry
                .execute_with_retry(&description, || self.client.get_type(name))
                .await?;

            type_chart.insert(name, detail.damage_relations);

            if !pacing.type_request_pause().is_zero() {
                tokio::time::sleep(pacing.type_request_pause()).await;
            }
        }

        if type_chart.is_empty() {
            return Err(AnalysisError::EmptyTypeChart.into());
        }

        tracing::info!("Built type chart with {} types", type_chart.len());

        Ok(type_chart)
    }
}
