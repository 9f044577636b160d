use serde::{Deserialize, Serialize};

use crate::bin_constants::{
    DEFAULT_ARGON2_M_COST, DEFAULT_ARGON2_P_COST, DEFAULT_ARGON2_T_COST,
};

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct HasherConfigData {
    #[serde(default = "default_m_cost")]
    pub m_cost: u32,
    #[serde(default = "default_t_cost")]
    pub t_cost: u32,
    #[serde(default = "default_p_cost")]
    pub p_cost: u32,
}

impl Default for HasherConfigData {
    fn default() -> Self {
        HasherConfigData {
            m_cost: default_m_cost(),
            t_cost: default_t_cost(),
            p_cost: default_p_cost(),
        }
    }
}

fn default_m_cost() -> u32 {
    DEFAULT_ARGON2_M_COST
}

fn default_t_cost() -> u32 {
    DEFAULT_ARGON2_T_COST
}

fn default_p_cost() -> u32 {
    DEFAULT_ARGON2_P_COST
}
