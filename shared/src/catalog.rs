//! Fixed hotel service catalog
//!
//! The catalog is static: the set of amenities a guest can request does not
//! change at runtime, so it ships with the binary instead of living in the
//! database. `service` on a request is still stored as free text; the
//! catalog is the menu, not a constraint.

use serde::Serialize;

/// One entry in the guest-facing service catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceCatalogEntry {
    /// Stable slug, e.g. "room-service"
    pub id: &'static str,
    /// Display name shown to the guest
    pub name: &'static str,
    /// Short description for the catalog page
    pub description: &'static str,
}

/// The full service catalog, in display order
pub const SERVICE_CATALOG: &[ServiceCatalogEntry] = &[
    ServiceCatalogEntry {
        id: "room-service",
        name: "Room Service",
        description: "Delicious meals delivered directly to your room, available 24/7.",
    },
    ServiceCatalogEntry {
        id: "housekeeping",
        name: "Housekeeping",
        description: "Professional room cleaning and maintenance services.",
    },
    ServiceCatalogEntry {
        id: "laundry-service",
        name: "Laundry Service",
        description: "Professional cleaning and pressing of your garments.",
    },
    ServiceCatalogEntry {
        id: "airport-shuttle",
        name: "Airport Shuttle",
        description: "Convenient transportation to and from the airport.",
    },
    ServiceCatalogEntry {
        id: "concierge",
        name: "Concierge",
        description: "Personal assistance for reservations and recommendations.",
    },
    ServiceCatalogEntry {
        id: "spa-wellness",
        name: "Spa & Wellness",
        description: "Rejuvenating spa treatments and wellness services.",
    },
    ServiceCatalogEntry {
        id: "gym",
        name: "Gym",
        description: "State-of-the-art fitness center with modern equipment.",
    },
    ServiceCatalogEntry {
        id: "swimming-pool",
        name: "Swimming Pool",
        description: "Refreshing pool area with poolside service available.",
    },
    ServiceCatalogEntry {
        id: "business-center",
        name: "Business Center",
        description: "Fully equipped business facilities for your work needs.",
    },
    ServiceCatalogEntry {
        id: "wifi-support",
        name: "WiFi Support",
        description: "Technical assistance with in-room internet access.",
    },
];

/// Look up a catalog entry by its slug
pub fn find_by_id(id: &str) -> Option<&'static ServiceCatalogEntry> {
    SERVICE_CATALOG.iter().find(|entry| entry.id == id)
}
