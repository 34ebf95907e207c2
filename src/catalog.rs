//! Catalog definitions and loading.
//!
//! A catalog is the finite list of features the index is built from. The
//! built-in catalog ships the stock menu entries; deployments can override it
//! with a TOML file of `[[feature]]` tables.

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::errors::{FeatgrepError, Result};
use crate::index::FeatureIndex;
use crate::types::FeatureRecord;

#[derive(Debug, Clone, Deserialize)]
pub struct Catalog {
    #[serde(rename = "feature", default)]
    features: Vec<FeatureRecord>,
}

impl Catalog {
    /// The stock catalog of menu entries.
    pub fn builtin() -> Self {
        let features = vec![
            FeatureRecord::new(
                "status_sistema",
                "Dashboard > Status do Sistema",
                "Visualizar status atual do sistema solar",
                "Monitoramento",
            ),
            FeatureRecord::new(
                "economia",
                "Dashboard > Economia",
                "Visualizar economia e dados financeiros",
                "Financeiro",
            ),
            FeatureRecord::new(
                "previsao",
                "Dashboard > Previsão",
                "Ver previsões de geração de energia",
                "Análise",
            ),
            FeatureRecord::new(
                "alterar_perfil",
                "Perfil > Atualizar Perfil",
                "Atualizar informações do perfil",
                "Usuário",
            ),
            FeatureRecord::new(
                "alterar_senha",
                "Perfil > Alterar Senha",
                "Modificar senha de acesso",
                "Segurança",
            ),
            FeatureRecord::new(
                "deletar_perfil",
                "Perfil > Deletar Perfil",
                "Deletar perfil",
                "Usuário",
            ),
            FeatureRecord::new(
                "chat_ia",
                "Chat com SolarIA",
                "Conversar com assistente virtual",
                "Suporte",
            ),
        ];
        Self { features }
    }

    /// Parses a catalog from TOML. Every entry must carry a non-empty name.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let catalog: Catalog = toml::from_str(raw)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let catalog = Self::from_toml_str(&raw)?;
        debug!(features = catalog.len(), path = %path.display(), "loaded catalog file");
        Ok(catalog)
    }

    pub fn features(&self) -> &[FeatureRecord] {
        &self.features
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Builds the balanced index. Entries sharing a name (case-insensitively)
    /// collapse to the first occurrence, per the index's duplicate policy.
    pub fn into_index(self) -> FeatureIndex {
        let mut index = FeatureIndex::new();
        for record in self.features {
            index.insert(record);
        }
        index
    }

    fn validate(&self) -> Result<()> {
        for (position, record) in self.features.iter().enumerate() {
            if record.name.trim().is_empty() {
                return Err(FeatgrepError::EmptyFeatureName { position: position + 1 });
            }
        }
        Ok(())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
