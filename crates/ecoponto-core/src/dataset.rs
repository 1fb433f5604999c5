//! Static seed dataset: the disposal points of Penha, SC.
//!
//! This list is the default active dataset until a remote city search
//! replaces it wholesale. Ids are unique and stable.

use crate::location::{Coordinates, Location, LocationId, WasteCategory};

/// Default map center (Penha, SC), also the center of the seed dataset.
pub const PENHA_CENTER: Coordinates = Coordinates {
    lat: -26.7689,
    lng: -48.6428,
};

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

/// The six seed disposal locations.
#[must_use]
pub fn seed_locations() -> Vec<Location> {
    vec![
        Location {
            id: LocationId::Seed(1),
            name: "Ecoponto Central Penha".to_owned(),
            address: "Av. Nereu Ramos, 1500 - Centro, Penha - SC".to_owned(),
            coordinates: Coordinates {
                lat: -26.7689,
                lng: -48.6428,
            },
            opening_hours: "Seg-Sex: 8h-18h, Sáb: 8h-12h".to_owned(),
            phone: Some("(47) 3345-1234".to_owned()),
            accepted_materials: owned(&[
                "Pilhas",
                "Baterias",
                "Celulares",
                "Computadores",
                "Periféricos",
                "Cabos",
            ]),
            categories: vec![
                WasteCategory::Batteries,
                WasteCategory::SmallElectronics,
                WasteCategory::Computers,
                WasteCategory::PhonesTablets,
                WasteCategory::CablesAccessories,
            ],
            description: "Principal ponto de coleta de eletrônicos da cidade. Aceita \
                          praticamente todos os tipos de resíduos eletrônicos."
                .to_owned(),
        },
        Location {
            id: LocationId::Seed(2),
            name: "Supermercado Verde".to_owned(),
            address: "Rua João Pessoa, 890 - Armação, Penha - SC".to_owned(),
            coordinates: Coordinates {
                lat: -26.7750,
                lng: -48.6380,
            },
            opening_hours: "Seg-Dom: 7h-22h".to_owned(),
            phone: Some("(47) 3345-5678".to_owned()),
            accepted_materials: owned(&["Pilhas", "Baterias", "Lâmpadas"]),
            categories: vec![WasteCategory::Batteries],
            description: "Ponto de coleta de pilhas e baterias. Localizado próximo ao \
                          caixa do supermercado."
                .to_owned(),
        },
        Location {
            id: LocationId::Seed(3),
            name: "Loja TecMundo".to_owned(),
            address: "Av. Atlântica, 2340 - Praia de Armação, Penha - SC".to_owned(),
            coordinates: Coordinates {
                lat: -26.7820,
                lng: -48.6450,
            },
            opening_hours: "Seg-Sáb: 9h-19h".to_owned(),
            phone: Some("(47) 3345-9012".to_owned()),
            accepted_materials: owned(&[
                "Celulares",
                "Tablets",
                "Acessórios",
                "Cabos",
                "Fones de ouvido",
            ]),
            categories: vec![
                WasteCategory::PhonesTablets,
                WasteCategory::SmallElectronics,
                WasteCategory::CablesAccessories,
            ],
            description: "Especializada em celulares e tablets. Aceita aparelhos antigos \
                          para reciclagem."
                .to_owned(),
        },
        Location {
            id: LocationId::Seed(4),
            name: "Centro de Reciclagem Municipal".to_owned(),
            address: "Rua dos Trabalhadores, 450 - Gravatá, Penha - SC".to_owned(),
            coordinates: Coordinates {
                lat: -26.7650,
                lng: -48.6500,
            },
            opening_hours: "Seg-Sex: 7h-17h".to_owned(),
            phone: Some("(47) 3345-2000".to_owned()),
            accepted_materials: owned(&[
                "Geladeiras",
                "Fogões",
                "Máquinas de lavar",
                "Ar-condicionado",
                "Micro-ondas",
            ]),
            categories: vec![WasteCategory::LargeAppliances],
            description: "Centro municipal especializado em eletrodomésticos de grande \
                          porte. Agendamento recomendado."
                .to_owned(),
        },
        Location {
            id: LocationId::Seed(5),
            name: "Farmácia Saúde+".to_owned(),
            address: "Rua São Pedro, 120 - Centro, Penha - SC".to_owned(),
            coordinates: Coordinates {
                lat: -26.7700,
                lng: -48.6410,
            },
            opening_hours: "Seg-Sex: 8h-20h, Sáb: 8h-14h".to_owned(),
            phone: Some("(47) 3345-3456".to_owned()),
            accepted_materials: owned(&["Pilhas", "Baterias"]),
            categories: vec![WasteCategory::Batteries],
            description: "Ponto de coleta conveniente para pilhas e baterias pequenas."
                .to_owned(),
        },
        Location {
            id: LocationId::Seed(6),
            name: "Informática Plus".to_owned(),
            address: "Av. Brasil, 678 - Centro, Penha - SC".to_owned(),
            coordinates: Coordinates {
                lat: -26.7710,
                lng: -48.6395,
            },
            opening_hours: "Seg-Sex: 9h-18h, Sáb: 9h-13h".to_owned(),
            phone: Some("(47) 3345-7890".to_owned()),
            accepted_materials: owned(&[
                "Computadores",
                "Notebooks",
                "Monitores",
                "Teclados",
                "Mouses",
                "Impressoras",
            ]),
            categories: vec![WasteCategory::Computers, WasteCategory::CablesAccessories],
            description: "Assistência técnica que aceita equipamentos de informática \
                          para descarte adequado."
                .to_owned(),
        },
    ]
}
