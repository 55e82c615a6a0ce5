//! Region constants

/// Azure regions closest to Brazil, ordered by approximate distance.
/// List position is the distance rank used throughout the report.
pub const REGIONS_NEAR_BRAZIL: [&str; 14] = [
    "brazilsouth",    // São Paulo, Brazil
    "chilecentral",   // Santiago, Chile
    "eastus",         // Virginia, USA
    "eastus2",        // Virginia, USA
    "southcentralus", // Texas, USA
    "centralus",      // Iowa, USA
    "northcentralus", // Illinois, USA
    "westcentralus",  // Wyoming, USA
    "canadacentral",  // Toronto, Canada
    "canadaeast",     // Quebec, Canada
    "westus",         // California, USA
    "westus2",        // Washington, USA
    "westus3",        // Arizona, USA
    "mexicocentral",  // Mexico
];
