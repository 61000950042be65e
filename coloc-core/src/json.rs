//! JSON projections of the data model.
//!
//! Entities are never serialized directly. Each one has a borrowed projection
//! that states exactly which derived fields it adds: identifiers are rendered
//! in their canonical string form, causal variants gain their credible set
//! count and membership, and a colocalization gains its credible set sizes.

use serde::{Serialize, Serializer};

use crate::models::{CausalVariant, Colocalization, Locus, Variant};

impl Serialize for Variant {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl Serialize for Locus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Serialize, Debug)]
pub struct CausalVariantJson<'a> {
    pub variant: Option<&'a Variant>,
    pub position: Option<u64>,
    pub pip1: Option<f64>,
    pub beta1: Option<f64>,
    pub pip2: Option<f64>,
    pub beta2: Option<f64>,
    pub count_cs: usize,
    pub membership_cs: String,
}

impl<'a> From<&'a CausalVariant> for CausalVariantJson<'a> {
    fn from(value: &'a CausalVariant) -> Self {
        CausalVariantJson {
            variant: value.variant.as_ref(),
            position: value.variant.as_ref().map(|v| v.position),
            pip1: value.pip1(),
            beta1: value.beta1(),
            pip2: value.pip2(),
            beta2: value.beta2(),
            count_cs: value.credible_set_count(),
            membership_cs: value.credible_set_membership().to_string(),
        }
    }
}

#[derive(Serialize, Debug)]
pub struct ColocalizationJson<'a> {
    pub source1: &'a str,
    pub source2: &'a str,
    pub phenotype1: &'a str,
    pub phenotype1_description: &'a str,
    pub phenotype2: &'a str,
    pub phenotype2_description: &'a str,
    pub quant1: Option<&'a str>,
    pub quant2: Option<&'a str>,
    pub tissue1: Option<&'a str>,
    pub tissue2: &'a str,
    pub locus_id1: &'a Variant,
    pub locus_id2: &'a Variant,
    pub locus: Option<&'a Locus>,
    pub clpp: f64,
    pub clpa: f64,
    pub len_cs1: u64,
    pub len_cs2: u64,
    pub len_inter: u64,
    pub credible_set_size_1: usize,
    pub credible_set_size_2: usize,
    pub variants: Vec<CausalVariantJson<'a>>,
}

impl<'a> From<&'a Colocalization> for ColocalizationJson<'a> {
    fn from(value: &'a Colocalization) -> Self {
        ColocalizationJson {
            source1: &value.source1,
            source2: &value.source2,
            phenotype1: &value.phenotype1,
            phenotype1_description: &value.phenotype1_description,
            phenotype2: &value.phenotype2,
            phenotype2_description: &value.phenotype2_description,
            quant1: value.quant1.as_deref(),
            quant2: value.quant2.as_deref(),
            tissue1: value.tissue1.as_deref(),
            tissue2: &value.tissue2,
            locus_id1: &value.locus_id1,
            locus_id2: &value.locus_id2,
            locus: value.locus.as_ref(),
            clpp: value.clpp,
            clpa: value.clpa,
            len_cs1: value.len_cs1,
            len_cs2: value.len_cs2,
            len_inter: value.len_inter,
            credible_set_size_1: value.credible_set_size_1(),
            credible_set_size_2: value.credible_set_size_2(),
            variants: value.variants.iter().map(CausalVariantJson::from).collect(),
        }
    }
}

impl CausalVariant {
    pub fn json_rep(&self) -> CausalVariantJson<'_> {
        CausalVariantJson::from(self)
    }
}

impl Colocalization {
    pub fn json_rep(&self) -> ColocalizationJson<'_> {
        ColocalizationJson::from(self)
    }

    ///
    /// Render the record as a single line of JSON.
    ///
    pub fn to_json_string(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.json_rep())
    }
}
