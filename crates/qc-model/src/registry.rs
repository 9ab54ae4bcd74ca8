//! Static module catalog.

use std::collections::BTreeSet;

use crate::error::{ModelError, Result};
use crate::module::{Module, ModuleId, Theme};

/// Ordered, immutable catalog of journey modules.
///
/// Insertion order is display order. Ids are validated once at
/// construction: they must be non-zero and unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleRegistry {
    modules: Vec<Module>,
}

impl ModuleRegistry {
    /// Build a registry from modules in display order.
    pub fn new(modules: Vec<Module>) -> Result<Self> {
        let mut seen = BTreeSet::new();
        for module in &modules {
            if module.id.get() == 0 {
                return Err(ModelError::ZeroModuleId);
            }
            if !seen.insert(module.id) {
                return Err(ModelError::DuplicateModuleId(module.id));
            }
        }
        Ok(Self { modules })
    }

    /// The four-module Quebrada Conectada journey.
    pub fn quebrada_conectada() -> Self {
        Self {
            modules: vec![
                Module::new(
                    1,
                    "Módulo 1: O Lazer que Vira Labuta",
                    "O Excedente Comportamental",
                    "Descubra como seu clique no jogo se transforma em valor para grandes \
                     corporações, numa simulação do Capitalismo de Vigilância.",
                    Theme::Vigilance,
                ),
                Module::new(
                    2,
                    "Módulo 2: Infraestrutura da Vulnerabilidade",
                    "O Desafio da Quebrada",
                    "Entenda como a infraestrutura de rede precária te expõe a riscos de \
                     segurança e vulnerabilidades conhecidas (CVEs).",
                    Theme::Vigilance,
                ),
                Module::new(
                    3,
                    "Módulo 3: O Olhar Crítico da LGPD",
                    "O Dilema Intrínseco",
                    "Teste seu entendimento sobre consentimento de dados e veja o conflito \
                     entre privacidade e os sistemas anti-cheat.",
                    Theme::Literacy,
                ),
                Module::new(
                    4,
                    "Módulo 4: Autonomia Digital",
                    "Estratégias da Quebrada",
                    "Aprenda estratégias práticas para se proteger online, desde MFA e VPNs \
                     até a organização comunitária.",
                    Theme::Literacy,
                ),
            ],
        }
    }

    /// All modules in display order.
    pub fn all(&self) -> &[Module] {
        &self.modules
    }

    /// Look up a module by id.
    pub fn by_id(&self, id: ModuleId) -> Result<&Module> {
        self.modules
            .iter()
            .find(|module| module.id == id)
            .ok_or(ModelError::ModuleNotFound(id))
    }

    pub fn contains(&self, id: ModuleId) -> bool {
        self.modules.iter().any(|module| module.id == id)
    }

    /// Module ids in display order.
    pub fn ids(&self) -> impl Iterator<Item = ModuleId> + '_ {
        self.modules.iter().map(|module| module.id)
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

impl Default for ModuleRegistry {
    fn default() -> Self {
        Self::quebrada_conectada()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_has_four_modules_in_order() {
        let registry = ModuleRegistry::quebrada_conectada();
        let ids: Vec<u32> = registry.ids().map(ModuleId::get).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert_eq!(registry.all()[2].theme, Theme::Literacy);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let result = ModuleRegistry::new(vec![
            Module::new(1, "a", "", "", Theme::Vigilance),
            Module::new(1, "b", "", "", Theme::Literacy),
        ]);
        assert_eq!(result, Err(ModelError::DuplicateModuleId(ModuleId::new(1))));
    }

    #[test]
    fn rejects_zero_id() {
        let result = ModuleRegistry::new(vec![Module::new(0, "a", "", "", Theme::Ludicity)]);
        assert_eq!(result, Err(ModelError::ZeroModuleId));
    }
}
