use super::{EdgeRecord, MapDataset, VertexRecord};
use crate::graph::VertexKind::{self, Corner, PointOfInterest};

/// Surveyed downtown pedestrian map: 120 vertices (street corners plus
/// points of interest along each block) and the directed walking
/// distances between neighboring points, in meters.
///
/// Ids are stable across releases - the frontend refers to vertices by
/// these ids. Corners carry no street of their own ("N/A").
#[rustfmt::skip]
const VERTICES: &[(i32, &str, &str, &str, VertexKind, i32, i32)] = &[
    (0, "Esquina A", "Esquina", "N/A", Corner, 23, 148),
    (1, "Esquina B", "Esquina", "N/A", Corner, 147, 146),
    (2, "Esquina C", "Esquina", "N/A", Corner, 268, 145),
    (3, "Esquina D", "Esquina", "N/A", Corner, 392, 144),
    (4, "Esquina E", "Esquina", "N/A", Corner, 26, 274),
    (5, "Esquina F", "Esquina", "N/A", Corner, 148, 272),
    (6, "Esquina G", "Esquina", "N/A", Corner, 271, 268),
    (7, "Esquina H", "Esquina", "N/A", Corner, 393, 269),
    (8, "Esquina I", "Esquina", "N/A", Corner, 29, 397),
    (9, "Esquina J", "Esquina", "N/A", Corner, 152, 396),
    (10, "Esquina K", "Esquina", "N/A", Corner, 270, 394),
    (11, "Esquina L", "Esquina", "N/A", Corner, 395, 393),
    (12, "Esquina M", "Esquina", "N/A", Corner, 32, 517),
    (13, "Esquina N", "Esquina", "N/A", Corner, 153, 519),
    (14, "Esquina O", "Esquina", "N/A", Corner, 271, 518),
    (15, "Esquina P", "Esquina", "N/A", Corner, 398, 518),
    (16, "Esquina Q", "Esquina", "N/A", Corner, 32, 641),
    (17, "Esquina R", "Esquina", "N/A", Corner, 155, 641),
    (18, "Esquina S", "Esquina", "N/A", Corner, 271, 642),
    (19, "Esquina T", "Esquina", "N/A", Corner, 400, 643),
    (20, "Esquina U", "Esquina", "N/A", Corner, 22, 26),
    (21, "Esquina V", "Esquina", "N/A", Corner, 144, 24),
    (22, "Pastelaria Pasteten Platz", "Restaurante", "R. 7 de Setembro", PointOfInterest, 194, 146),
    (23, "BOTECO Spettu's Beer", "Bar", "R. 7 de Setembro", PointOfInterest, 241, 145),
    (24, "Conves", "Bar", "R. 7 de Setembro", PointOfInterest, 257, 145),
    (25, "Posto BR Mania Conveniência", "Posto de gasolina", "R. 7 de Setembro", PointOfInterest, 279, 145),
    (26, "Di Capri", "Restaurante", "R. 7 de Setembro", PointOfInterest, 352, 144),
    (27, "Barbudas", "Bar", "R. Borges de Medeiros", PointOfInterest, 38, 274),
    (28, "Holy Sheep Craft Brewery", "Bar", "R. Borges de Medeiros", PointOfInterest, 69, 273),
    (29, "Paragem Galeteria e Restaurante", "Restaurante", "R. Borges de Medeiros", PointOfInterest, 175, 271),
    (30, "Parque Infantil", "Entretenimento", "R. Borges de Medeiros", PointOfInterest, 180, 271),
    (31, "La Fiamma", "Restaurante", "R. Borges de Medeiros", PointOfInterest, 191, 271),
    (32, "Melina Cozinha & Vinho", "Restaurante", "R. Borges de Medeiros", PointOfInterest, 223, 270),
    (33, "Severo Garage", "Restaurante", "R. Borges de Medeiros", PointOfInterest, 247, 269),
    (34, "Santa Poke", "Restaurante", "R. Borges de Medeiros", PointOfInterest, 314, 268),
    (35, "Villa", "Restaurante", "R. Borges de Medeiros", PointOfInterest, 322, 268),
    (36, "Heilige", "Cervejaria", "R. Borges de Medeiros", PointOfInterest, 330, 268),
    (37, "Velasco", "Restaurante", "R. Borges de Medeiros", PointOfInterest, 350, 269),
    (38, "Pizzaria Fornalha", "Restaurante", "R. Borges de Medeiros", PointOfInterest, 353, 269),
    (39, "Barbados", "Barbearia", "R. 28 de Setembro", PointOfInterest, 56, 397),
    (40, "Sociedad", "Comércio", "R. 28 de Setembro", PointOfInterest, 112, 396),
    (41, "Minhagriffe", "Comércio", "R. 28 de Setembro", PointOfInterest, 163, 396),
    (42, "Dullius", "Moda e Vestuário", "R. 28 de Setembro", PointOfInterest, 181, 396),
    (43, "Visual Modas", "Moda e Vestuário", "R. 28 de Setembro", PointOfInterest, 190, 395),
    (44, "Armazém Kids", "Moda e Vestuário", "R. 28 de Setembro", PointOfInterest, 236, 395),
    (45, "Pattussi", "Moda e Vestuário", "R. 28 de Setembro", PointOfInterest, 298, 394),
    (46, "Dorinho", "Moda e Vestuário", "R. 28 de Setembro", PointOfInterest, 306, 394),
    (47, "Clip Graffite 1", "Papelaria", "R. 28 de Setembro", PointOfInterest, 330, 394),
    (48, "Colcci", "Moda e Vestuário", "R. 28 de Setembro", PointOfInterest, 379, 393),
    (49, "Clip Graffite 2", "Papelaria", "R. Júlio de Castilhos", PointOfInterest, 67, 518),
    (50, "Green Center", "Galeria", "R. Júlio de Castilhos", PointOfInterest, 118, 518),
    (51, "Vanusa", "Moda e Vestuário", "R. Júlio de Castilhos", PointOfInterest, 164, 519),
    (52, "Pioneira", "Moda e Vestuário", "R. Júlio de Castilhos", PointOfInterest, 171, 519),
    (53, "Galeria Farah", "Galeria", "R. Júlio de Castilhos", PointOfInterest, 225, 518),
    (54, "Le Chef", "Restaurante", "R. Júlio de Castilhos", PointOfInterest, 329, 518),
    (55, "Praça Getúlio Vargas 1", "Centro Histórico", "R. Júlio de Castilhos", PointOfInterest, 332, 518),
    (56, "Gang", "Moda e Vestuário", "R. Júlio de Castilhos", PointOfInterest, 337, 518),
    (57, "Caixa", "Banco", "R. Júlio de Castilhos", PointOfInterest, 365, 518),
    (58, "São João Farmácias 1", "Saúde", "R. Júlio de Castilhos", PointOfInterest, 386, 518),
    (59, "Rodoil", "Posto de gasolina", "R. Ramiro Barcelos", PointOfInterest, 99, 641),
    (60, "Coma Bem", "Restaurante", "R. Ramiro Barcelos", PointOfInterest, 123, 641),
    (61, "Hotel Santa Cruz", "Hotel", "R. Ramiro Barcelos", PointOfInterest, 169, 641),
    (62, "Sicredi", "Banco", "R. Ramiro Barcelos", PointOfInterest, 200, 641),
    (63, "Bifão Grill", "Restaurante", "R. Ramiro Barcelos", PointOfInterest, 208, 641),
    (64, "Santander", "Banco", "R. Ramiro Barcelos", PointOfInterest, 286, 642),
    (65, "Catedral São João Batista", "Centro Histórico", "R. Ramiro Barcelos", PointOfInterest, 325, 642),
    (66, "Praça Getúlio Vargas 2", "Centro Histórico", "R. Ramiro Barcelos", PointOfInterest, 333, 642),
    (67, "Igreja Evangélica de Confissão Luterana", "Centro Histórico", "R. Venâncio Aires", PointOfInterest, 23, 168),
    (68, "Panvel Farmácias", "Saúde", "R. Venâncio Aires", PointOfInterest, 29, 386),
    (69, "Igreja Universal do Reino de Deus", "Centro Histórico", "R. Venâncio Aires", PointOfInterest, 32, 598),
    (70, "Praça da Bandeira", "Centro Histórico", "R. Tenente Coronel Brito", PointOfInterest, 147, 207),
    (71, "Flamula Sports Bar", "Restaurante", "R. Tenente Coronel Brito", PointOfInterest, 148, 280),
    (72, "Hotel Schulz", "Hotel", "R. Tenente Coronel Brito", PointOfInterest, 149, 307),
    (73, "Churrascaria Centenário", "Restaurante", "R. Tenente Coronel Brito", PointOfInterest, 149, 312),
    (74, "Brincasa", "Comércio", "R. Tenente Coronel Brito", PointOfInterest, 151, 356),
    (75, "Nacional", "Supermercado", "R. Tenente Coronel Brito", PointOfInterest, 151, 364),
    (76, "Kothe Esportes", "Moda e Vestuário", "R. Tenente Coronel Brito", PointOfInterest, 152, 428),
    (77, "Panificadora Jamaica", "Padaria", "R. Tenente Coronel Brito", PointOfInterest, 153, 480),
    (78, "São João Farmácias 2", "Saúde", "R. Tenente Coronel Brito", PointOfInterest, 153, 538),
    (79, "Bradesco", "Banco", "R. Tenente Coronel Brito", PointOfInterest, 154, 593),
    (80, "Lojas Becker", "Comércio", "R. Tenente Coronel Brito", PointOfInterest, 155, 622),
    (81, "Charrua Hotel", "Hotel", "R. Marechal Floriano", PointOfInterest, 268, 161),
    (82, "Dovino Adega", "Adega", "R. Marechal Floriano", PointOfInterest, 269, 183),
    (83, "Central", "Bar", "R. Marechal Floriano", PointOfInterest, 270, 228),
    (84, "Heilige Pocket", "Cervejaria", "R. Marechal Floriano", PointOfInterest, 270, 244),
    (85, "Iluminura Livraria e Cafeteria", "Cafeteria", "R. Marechal Floriano", PointOfInterest, 271, 257),
    (86, "Amsterdam Choperia Sunset", "Bar", "R. Marechal Floriano", PointOfInterest, 271, 278),
    (87, "Hering", "Comércio", "R. Marechal Floriano", PointOfInterest, 271, 279),
    (88, "Subway", "Restaurante", "R. Marechal Floriano", PointOfInterest, 271, 288),
    (89, "Sorveteria da Mônica", "Doces", "R. Marechal Floriano", PointOfInterest, 271, 293),
    (90, "Hbier Box", "Bar", "R. Marechal Floriano", PointOfInterest, 271, 317),
    (91, "Renner", "Moda e Vestuário", "R. Marechal Floriano", PointOfInterest, 270, 338),
    (92, "São João Farmácias 3", "Saúde", "R. Marechal Floriano", PointOfInterest, 270, 383),
    (93, "Prata", "Moda e Vestuário", "R. Marechal Floriano", PointOfInterest, 270, 384),
    (94, "oBoticario", "Comércio", "R. Marechal Floriano", PointOfInterest, 270, 405),
    (95, "Ultramed Farmácias", "Saúde", "R. Marechal Floriano", PointOfInterest, 270, 407),
    (96, "Casa do Papel", "Papelaria", "R. Marechal Floriano", PointOfInterest, 270, 433),
    (97, "Rosa Norte", "Moda e Vestuário", "R. Marechal Floriano", PointOfInterest, 270, 449),
    (98, "Magazine Luiza", "Comércio", "R. Marechal Floriano", PointOfInterest, 270, 454),
    (99, "Casas Bahia", "Comércio", "R. Marechal Floriano", PointOfInterest, 271, 471),
    (100, "Casa das Artes Regina Simonis", "Centro Histórico", "R. Marechal Floriano", PointOfInterest, 271, 507),
    (101, "Quiosque", "Restaurante", "R. Marechal Floriano", PointOfInterest, 271, 547),
    (102, "Monumento em homenagem às mães", "Centro Histórico", "R. Marechal Floriano", PointOfInterest, 271, 587),
    (103, "Pompéia", "Moda e Vestuário", "R. Marechal Floriano", PointOfInterest, 271, 611),
    (104, "Quero Quero", "Comércio", "R. Marechal Floriano", PointOfInterest, 271, 631),
    (105, "Minato Sushi", "Restaurante", "R. Marechal Deodoro", PointOfInterest, 392, 155),
    (106, "OCTO Sushi", "Restaurante", "R. Marechal Deodoro", PointOfInterest, 392, 180),
    (107, "Gatta di Latte Gelateria", "Doces", "R. Marechal Deodoro", PointOfInterest, 392, 202),
    (108, "Nàpule Pizzeria", "Restaurante", "R. Marechal Deodoro", PointOfInterest, 393, 222),
    (109, "Sr. Espetto Gastropub / Proeza Bier", "Restaurante", "R. Marechal Deodoro", PointOfInterest, 393, 258),
    (110, "Kopenhagen", "Doces", "R. Marechal Deodoro", PointOfInterest, 394, 353),
    (111, "Cheirin Bão", "Padaria", "R. Marechal Deodoro", PointOfInterest, 395, 382),
    (112, "Flavia Eliel Calçados e Acessórios", "Moda e Vestuário", "R. Marechal Deodoro", PointOfInterest, 395, 404),
    (113, "Dom Vito", "Moda e Vestuário", "R. Marechal Deodoro", PointOfInterest, 396, 419),
    (114, "McDonald's", "Comércio", "R. Marechal Deodoro", PointOfInterest, 397, 458),
    (115, "Banrisul", "Banco", "R. Marechal Deodoro", PointOfInterest, 397, 460),
    (116, "Droga Raia Farmácias", "Saúde", "R. Marechal Deodoro", PointOfInterest, 398, 507),
    (117, "Banco do Brasil", "Banco", "R. Marechal Deodoro", PointOfInterest, 399, 568),
    (118, "Estacionamento e lavagem Bunker Car", "Estacionamento", "R. Marechal Deodoro", PointOfInterest, 399, 589),
    (119, "Praça Hardy Elmiro Martin", "Centro Histórico", "R. Venâncio Aires", PointOfInterest, 23, 113),
];

#[rustfmt::skip]
const EDGES: &[(i32, i32, u32)] = &[
    (20, 21, 154), (1, 0, 154), (2, 24, 14), (24, 23, 20), (23, 22, 60), (22, 1, 60),
    (2, 25, 14), (25, 26, 90), (26, 3, 50), (3, 26, 50), (26, 25, 90), (25, 2, 14),
    (4, 27, 15), (27, 28, 39), (28, 5, 100), (5, 29, 34), (29, 30, 6), (30, 31, 14),
    (31, 32, 40), (32, 33, 30), (33, 6, 30), (6, 34, 54), (34, 35, 10), (35, 36, 10),
    (36, 37, 26), (37, 38, 4), (38, 7, 50), (11, 48, 20), (48, 47, 60), (47, 46, 30),
    (46, 45, 10), (45, 10, 34), (10, 44, 44), (44, 43, 60), (43, 42, 12), (42, 41, 24),
    (41, 9, 14), (9, 40, 50), (40, 39, 70), (39, 8, 34), (12, 49, 44), (49, 50, 66),
    (50, 13, 44), (13, 51, 14), (51, 52, 10), (52, 53, 70), (53, 14, 60), (14, 54, 70),
    (54, 55, 4), (55, 56, 6), (56, 57, 34), (57, 58, 26), (58, 15, 14), (19, 66, 80),
    (66, 65, 10), (65, 64, 46), (64, 18, 18), (18, 63, 84), (63, 62, 10), (62, 61, 42),
    (61, 17, 18), (17, 60, 40), (60, 59, 30), (59, 16, 84), (16, 69, 54), (69, 12, 100),
    (12, 8, 154), (8, 68, 14), (68, 4, 140), (4, 67, 130), (61, 0, 24), (0, 119, 44),
    (119, 20, 110), (21, 1, 154), (1, 70, 74), (70, 5, 80), (5, 71, 10), (71, 72, 34),
    (72, 73, 6), (73, 74, 54), (74, 75, 10), (75, 9, 40), (9, 76, 40), (76, 77, 65),
    (77, 13, 49), (13, 78, 24), (78, 79, 70), (79, 80, 36), (80, 17, 24), (18, 104, 14),
    (104, 103, 24), (103, 102, 30), (102, 101, 50), (101, 14, 36), (14, 100, 14), (100, 99, 46),
    (99, 98, 22), (98, 97, 6), (97, 96, 20), (96, 95, 32), (95, 94, 2), (94, 10, 14),
    (10, 93, 12), (93, 92, 2), (92, 91, 54), (91, 90, 26), (90, 89, 30), (89, 88, 6),
    (88, 87, 10), (87, 86, 2), (87, 6, 12), (6, 85, 14), (85, 84, 16), (84, 83, 20),
    (83, 82, 57), (82, 81, 27), (81, 2, 20), (3, 105, 14), (105, 106, 30), (106, 107, 28),
    (107, 108, 24), (108, 109, 44), (109, 7, 14), (7, 110, 104), (110, 111, 36), (111, 11, 14),
    (11, 112, 14), (112, 113, 18), (113, 114, 48), (114, 115, 2), (115, 116, 58), (116, 15, 14),
    (15, 117, 62), (117, 118, 26), (118, 19, 66),
];

/// The embedded city dataset, rebuilt as an owned value on every call so
/// each router instance gets its own copy.
pub fn dataset() -> MapDataset {
    let vertices = VERTICES
        .iter()
        .map(|&(id, name, category, street, kind, x, y)| VertexRecord {
            id,
            name: name.to_string(),
            category: category.to_string(),
            street: street.to_string(),
            kind,
            x,
            y,
        })
        .collect();
    let edges = EDGES
        .iter()
        .map(|&(source_id, dest_id, weight)| EdgeRecord {
            source_id,
            dest_id,
            weight,
        })
        .collect();
    MapDataset::new(vertices, edges)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::Router;

    #[test]
    fn dataset_dimensions() {
        let dataset = dataset();
        assert_eq!(dataset.vertices().len(), 120);
        assert_eq!(dataset.edges().len(), 135);
        assert_eq!(dataset.points_of_interest().count(), 98);
    }

    #[test]
    fn every_edge_endpoint_resolves() {
        let dataset = dataset();
        for e in dataset.edges() {
            assert!(dataset.vertex_by_id(e.source_id).is_some(), "source {}", e.source_id);
            assert!(dataset.vertex_by_id(e.dest_id).is_some(), "dest {}", e.dest_id);
        }
    }

    #[test]
    fn route_across_the_map() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();

        let router = Router::new(dataset());
        let route = router.compute_route(0, 20).unwrap();

        assert_eq!(route.vertex_ids.first(), Some(&0));
        assert_eq!(route.vertex_ids.last(), Some(&20));

        // total equals the sum of the step weights along the sequence
        let total: u32 = route
            .vertex_ids
            .windows(2)
            .map(|pair| {
                router
                    .dataset()
                    .edges()
                    .iter()
                    .filter(|e| e.source_id == pair[0] && e.dest_id == pair[1])
                    .map(|e| e.weight)
                    .min()
                    .unwrap()
            })
            .sum();
        assert_eq!(total, route.total_distance);

        // unmodified dataset, identical request: identical answer
        assert_eq!(router.compute_route(0, 20).unwrap(), route);
    }
}
