pub mod combined;
pub mod nonstandard;
pub mod preset;

pub mod phase0 {
    pub mod consts;
    pub mod containers;
    pub mod primitives;
}

pub mod altair {
    pub mod containers;
}

pub mod bellatrix {
    pub mod containers;
    pub mod primitives;
}

pub mod capella {
    pub mod containers;
    pub mod primitives;
}

pub mod deneb {
    pub mod containers;
    pub mod primitives;
}
