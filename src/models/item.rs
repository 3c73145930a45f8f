//! Item (lendable object) model and related types.
//!
//! Every item shares an id, a display name and its loan state; the
//! variant-specific attribute lives in [`ItemDetails`]. An item is available
//! exactly when it carries no [`Loan`], so availability and borrower can
//! never disagree.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::accessory::Accessory;
use super::loan::Loan;
use crate::config::ItemSeed;
use crate::error::{AppError, AppResult};

const RULE: &str = "-------------------------";

/// Item variant tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Tool,
    Appliance,
    GardenEquipment,
}

impl ItemKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Tool => "tool",
            ItemKind::Appliance => "appliance",
            ItemKind::GardenEquipment => "garden_equipment",
        }
    }

    /// Human-readable label used in item descriptions
    pub fn label(&self) -> &'static str {
        match self {
            ItemKind::Tool => "Workshop Tool",
            ItemKind::Appliance => "Kitchen Appliance",
            ItemKind::GardenEquipment => "Garden Tool",
        }
    }

    /// Name of the variant-specific attribute
    pub fn attribute_label(&self) -> &'static str {
        match self {
            ItemKind::Tool => "Power Type",
            ItemKind::Appliance => "Capacity",
            ItemKind::GardenEquipment => "Material",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for ItemKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "tool" | "workshop" | "workshop_tool" => Ok(ItemKind::Tool),
            "appliance" | "kitchen" | "kitchen_appliance" => Ok(ItemKind::Appliance),
            "garden" | "garden_tool" | "garden_equipment" => Ok(ItemKind::GardenEquipment),
            _ => Err(AppError::UnknownItemKind(s.to_string())),
        }
    }
}

/// Variant-specific payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ItemDetails {
    Tool {
        power_source: String,
        /// Fixed at construction
        accessories: Vec<Accessory>,
    },
    Appliance {
        capacity: String,
    },
    GardenEquipment {
        material: String,
    },
}

impl ItemDetails {
    pub fn kind(&self) -> ItemKind {
        match self {
            ItemDetails::Tool { .. } => ItemKind::Tool,
            ItemDetails::Appliance { .. } => ItemKind::Appliance,
            ItemDetails::GardenEquipment { .. } => ItemKind::GardenEquipment,
        }
    }

    /// Power source, capacity or material
    pub fn attribute(&self) -> &str {
        match self {
            ItemDetails::Tool { power_source, .. } => power_source,
            ItemDetails::Appliance { capacity } => capacity,
            ItemDetails::GardenEquipment { material } => material,
        }
    }
}

/// Item filter used by listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ItemFilter {
    #[default]
    All,
    Available,
    OnLoan,
}

impl ItemFilter {
    pub fn matches(&self, item: &Item) -> bool {
        match self {
            ItemFilter::All => true,
            ItemFilter::Available => item.is_available(),
            ItemFilter::OnLoan => !item.is_available(),
        }
    }
}

/// A lendable item
#[derive(Debug, Clone, Serialize)]
pub struct Item {
    id: String,
    name: String,
    #[serde(flatten)]
    details: ItemDetails,
    loan: Option<Loan>,
}

impl Item {
    pub fn tool(
        id: impl Into<String>,
        name: impl Into<String>,
        power_source: impl Into<String>,
        accessories: Vec<Accessory>,
    ) -> Self {
        Self::with_details(
            id,
            name,
            ItemDetails::Tool {
                power_source: power_source.into(),
                accessories,
            },
        )
    }

    pub fn appliance(id: impl Into<String>, name: impl Into<String>, capacity: impl Into<String>) -> Self {
        Self::with_details(id, name, ItemDetails::Appliance { capacity: capacity.into() })
    }

    pub fn garden_equipment(id: impl Into<String>, name: impl Into<String>, material: impl Into<String>) -> Self {
        Self::with_details(id, name, ItemDetails::GardenEquipment { material: material.into() })
    }

    /// Build an item of the given kind.
    ///
    /// `attribute` is interpreted per kind (power source, capacity or
    /// material). Only tools accept accessories.
    pub fn create(
        kind: ItemKind,
        id: impl Into<String>,
        name: impl Into<String>,
        attribute: impl Into<String>,
        accessories: Vec<Accessory>,
    ) -> AppResult<Self> {
        let id = id.into();
        if kind != ItemKind::Tool && !accessories.is_empty() {
            return Err(AppError::Validation(format!(
                "Item {}: accessories are only supported for tools",
                id
            )));
        }

        Ok(match kind {
            ItemKind::Tool => Self::tool(id, name, attribute, accessories),
            ItemKind::Appliance => Self::appliance(id, name, attribute),
            ItemKind::GardenEquipment => Self::garden_equipment(id, name, attribute),
        })
    }

    fn with_details(id: impl Into<String>, name: impl Into<String>, details: ItemDetails) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            details,
            loan: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ItemKind {
        self.details.kind()
    }

    pub fn details(&self) -> &ItemDetails {
        &self.details
    }

    /// Accessories required by a tool; empty for other kinds
    pub fn accessories(&self) -> &[Accessory] {
        match &self.details {
            ItemDetails::Tool { accessories, .. } => accessories,
            _ => &[],
        }
    }

    pub fn is_available(&self) -> bool {
        self.loan.is_none()
    }

    /// Id of the user currently holding the item
    pub fn borrower(&self) -> Option<&str> {
        self.loan.as_ref().map(|loan| loan.user_id.as_str())
    }

    pub fn loan(&self) -> Option<&Loan> {
        self.loan.as_ref()
    }

    pub fn status_label(&self) -> &'static str {
        if self.is_available() {
            "Available"
        } else {
            "On Loan"
        }
    }

    /// Full multi-line description of the item
    pub fn describe(&self) -> String {
        self.to_string()
    }

    /// One-line listing form, e.g. `WT001: Cordless Drill (Available)`
    pub fn summary(&self) -> String {
        format!("{}: {} ({})", self.id, self.name, self.status_label())
    }

    pub(crate) fn lend_to(&mut self, user_id: &str) -> AppResult<()> {
        if !self.is_available() {
            return Err(AppError::ItemUnavailable(self.id.clone()));
        }
        self.loan = Some(Loan::new(user_id));
        Ok(())
    }

    pub(crate) fn take_back(&mut self) -> AppResult<Loan> {
        self.loan
            .take()
            .ok_or_else(|| AppError::ItemNotOnLoan(self.id.clone()))
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", RULE)?;
        writeln!(f, "Item Type: {}", self.kind().label())?;
        writeln!(f, "ID: {}", self.id)?;
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "{}: {}", self.kind().attribute_label(), self.details.attribute())?;
        writeln!(f, "Status: {}", self.status_label())?;

        if let ItemDetails::Tool { accessories, .. } = &self.details {
            if accessories.is_empty() {
                writeln!(f, "Required Equipment: None")?;
            } else {
                writeln!(f, "Required Equipment:")?;
                for accessory in accessories {
                    writeln!(f, "- {}", accessory)?;
                }
            }
        }

        writeln!(f, "{}", RULE)
    }
}

impl TryFrom<&ItemSeed> for Item {
    type Error = AppError;

    fn try_from(seed: &ItemSeed) -> Result<Self, Self::Error> {
        let kind: ItemKind = seed.kind.parse()?;
        let accessories = seed.accessories.iter().map(Accessory::new).collect();
        Item::create(kind, &seed.id, &seed.name, &seed.attribute, accessories)
    }
}
