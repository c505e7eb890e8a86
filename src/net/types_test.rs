use super::*;

// =============================================================
// Helpers
// =============================================================

fn make_animal_json() -> serde_json::Value {
    serde_json::json!({
        "id": 7,
        "created_at": "2024-05-12T14:30:00Z",
        "nome": "Rex",
        "idade": 3,
        "especie": "cachorro",
        "adotado": false,
        "ong_id": 2,
        "ong_nome": "Patas Felizes",
        "adotante_id": null,
        "adotante_nome": null
    })
}

// =============================================================
// Species
// =============================================================

#[test]
fn species_wire_values_round_trip() {
    for species in Species::ALL {
        assert_eq!(Species::from_value(species.as_value()), Some(species));
    }
}

#[test]
fn species_from_value_rejects_unknown() {
    assert_eq!(Species::from_value("papagaio"), None);
    assert_eq!(Species::from_value(""), None);
}

#[test]
fn species_serializes_to_backend_values() {
    assert_eq!(serde_json::to_string(&Species::Dog).unwrap(), "\"cachorro\"");
    assert_eq!(serde_json::to_string(&Species::Cat).unwrap(), "\"gato\"");
    assert_eq!(serde_json::to_string(&Species::Other).unwrap(), "\"outro\"");
}

#[test]
fn species_default_is_dog() {
    assert_eq!(Species::default(), Species::Dog);
}

// =============================================================
// Entity decoding (Portuguese wire names)
// =============================================================

#[test]
fn animal_decodes_portuguese_fields() {
    let animal: Animal = serde_json::from_value(make_animal_json()).unwrap();
    assert_eq!(animal.id, 7);
    assert_eq!(animal.name, "Rex");
    assert_eq!(animal.age, 3);
    assert_eq!(animal.species, Species::Dog);
    assert!(!animal.adopted);
    assert_eq!(animal.ong_id, 2);
    assert_eq!(animal.ong_name.as_deref(), Some("Patas Felizes"));
    assert_eq!(animal.adopter_id, None);
    assert_eq!(animal.adopter_name, None);
}

#[test]
fn animal_decodes_without_expanded_names() {
    let json = serde_json::json!({
        "id": 1,
        "created_at": "2024-01-01T00:00:00Z",
        "nome": "Mia",
        "idade": 2,
        "especie": "gato",
        "adotado": true,
        "ong_id": 1
    });
    let animal: Animal = serde_json::from_value(json).unwrap();
    assert_eq!(animal.ong_name, None);
    assert_eq!(animal.adopter_id, None);
}

#[test]
fn adopter_decodes_portuguese_fields() {
    let json = serde_json::json!({
        "id": 4,
        "created_at": "2024-03-02T10:00:00Z",
        "nome": "Ana Souza",
        "cpf": "123.456.789-00",
        "endereco": "Rua das Flores, 10",
        "email": "ana@example.com",
        "telefone": "(11) 99999-0000"
    });
    let adopter: Adopter = serde_json::from_value(json).unwrap();
    assert_eq!(adopter.name, "Ana Souza");
    assert_eq!(adopter.address, "Rua das Flores, 10");
    assert_eq!(adopter.phone, "(11) 99999-0000");
}

#[test]
fn consultation_decodes_portuguese_fields() {
    let json = serde_json::json!({
        "id": 9,
        "created_at": "2024-06-01T08:00:00Z",
        "data": "2024-06-10T09:30:00Z",
        "veterinario": "Dra. Lima",
        "observacoes": null,
        "animal_id": 7,
        "animal_nome": "Rex"
    });
    let consultation: Consultation = serde_json::from_value(json).unwrap();
    assert_eq!(consultation.date, "2024-06-10T09:30:00Z");
    assert_eq!(consultation.veterinarian, "Dra. Lima");
    assert_eq!(consultation.notes, None);
    assert_eq!(consultation.animal_id, 7);
}

// =============================================================
// Payload encoding
// =============================================================

#[test]
fn animal_payload_encodes_portuguese_fields() {
    let payload = AnimalPayload {
        name: "Rex".to_owned(),
        age: 3,
        species: Species::Dog,
        adopted: false,
        ong: 2,
        adopter: None,
    };
    let json = serde_json::to_value(&payload).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "nome": "Rex",
            "idade": 3,
            "especie": "cachorro",
            "adotado": false,
            "ong": 2,
            "adotante": null
        })
    );
}

#[test]
fn consultation_payload_encodes_portuguese_fields() {
    let payload = ConsultationPayload {
        date: "2024-06-10".to_owned(),
        veterinarian: "Dra. Lima".to_owned(),
        notes: Some("Vacinação anual".to_owned()),
        animal_id: 7,
    };
    let json = serde_json::to_value(&payload).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "data": "2024-06-10",
            "veterinario": "Dra. Lima",
            "observacoes": "Vacinação anual",
            "animal_id": 7
        })
    );
}

#[test]
fn ngo_payload_encodes_portuguese_fields() {
    let payload = NgoPayload {
        name: "Patas Felizes".to_owned(),
        address: "Av. Central, 100".to_owned(),
        contact: "contato@patas.org".to_owned(),
    };
    let json = serde_json::to_value(&payload).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "nome": "Patas Felizes",
            "endereco": "Av. Central, 100",
            "contato": "contato@patas.org"
        })
    );
}

// =============================================================
// TokenPair / Credentials
// =============================================================

#[test]
fn token_pair_decodes_both_tokens() {
    let pair: TokenPair = serde_json::from_str(r#"{"access":"abc","refresh":"xyz"}"#).unwrap();
    assert_eq!(pair.access, "abc");
    assert_eq!(pair.refresh, "xyz");
}

#[test]
fn credentials_encode_to_the_token_request_body() {
    let credentials = Credentials { username: "ana", password: "s3cret" };
    let json = serde_json::to_value(&credentials).unwrap();
    assert_eq!(json, serde_json::json!({ "username": "ana", "password": "s3cret" }));
}

// =============================================================
// List envelope normalization
// =============================================================

#[test]
fn list_response_accepts_bare_array() {
    let json = serde_json::json!([make_animal_json()]);
    let list: ListResponse<Animal> = serde_json::from_value(json).unwrap();
    let items = list.into_items();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].name, "Rex");
}

#[test]
fn list_response_accepts_pagination_envelope() {
    let json = serde_json::json!({
        "count": 1,
        "next": null,
        "previous": null,
        "results": [make_animal_json()]
    });
    let list: ListResponse<Animal> = serde_json::from_value(json).unwrap();
    let items = list.into_items();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].name, "Rex");
}

#[test]
fn both_list_shapes_normalize_identically() {
    let bare: ListResponse<Ngo> = serde_json::from_value(serde_json::json!([
        {"id": 1, "created_at": "2024-01-01T00:00:00Z", "nome": "ONG A", "endereco": "Rua 1", "contato": "a@a.org"}
    ]))
    .unwrap();
    let enveloped: ListResponse<Ngo> = serde_json::from_value(serde_json::json!({
        "results": [
            {"id": 1, "created_at": "2024-01-01T00:00:00Z", "nome": "ONG A", "endereco": "Rua 1", "contato": "a@a.org"}
        ]
    }))
    .unwrap();
    assert_eq!(bare.into_items(), enveloped.into_items());
}

#[test]
fn empty_lists_normalize_in_both_shapes() {
    let bare: ListResponse<Adopter> = serde_json::from_str("[]").unwrap();
    let enveloped: ListResponse<Adopter> = serde_json::from_str(r#"{"results": []}"#).unwrap();
    assert!(bare.into_items().is_empty());
    assert!(enveloped.into_items().is_empty());
}

// =============================================================
// Consultation display label
// =============================================================

#[test]
fn animal_label_prefers_expanded_name() {
    let consultation = Consultation {
        id: 1,
        created_at: "2024-01-01T00:00:00Z".to_owned(),
        date: "2024-06-10".to_owned(),
        veterinarian: "Dr. X".to_owned(),
        notes: None,
        animal_id: 7,
        animal_name: Some("Rex".to_owned()),
    };
    assert_eq!(consultation.animal_label(), "Rex");
}

#[test]
fn animal_label_falls_back_to_key() {
    let consultation = Consultation {
        id: 1,
        created_at: "2024-01-01T00:00:00Z".to_owned(),
        date: "2024-06-10".to_owned(),
        veterinarian: "Dr. X".to_owned(),
        notes: None,
        animal_id: 7,
        animal_name: None,
    };
    assert_eq!(consultation.animal_label(), "Animal #7");
}

#[test]
fn animal_label_treats_empty_name_as_missing() {
    let consultation = Consultation {
        id: 1,
        created_at: "2024-01-01T00:00:00Z".to_owned(),
        date: "2024-06-10".to_owned(),
        veterinarian: "Dr. X".to_owned(),
        notes: None,
        animal_id: 3,
        animal_name: Some(String::new()),
    };
    assert_eq!(consultation.animal_label(), "Animal #3");
}
