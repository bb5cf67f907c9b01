//! Pinned stroke fixtures shared by the integration tests.
//!
//! The expected outputs are bit-exact. Any change to evaluation order in the
//! interpolator or smoother shows up here first.

#![allow(dead_code)]

use stabilizer::Sample;

/// Convert a fixture table into samples.
pub fn samples(table: &[(f64, f64, f64)]) -> Vec<Sample> {
    table.iter().copied().map(Sample::from).collect()
}

/// 100 uniformly random samples in [-10, 10]^2 with pressure in [1, 10].
pub const RANDOM_STROKE: [(f64, f64, f64); 100] = [
    (6.443113990519574, 6.736998256380492, 7.6842071809068395),
    (7.623875113877958, -6.505724830992086, 6.871000916957499),
    (-3.2104896666407567, -0.9205021011319694, 8.339888557816753),
    (7.913569509794577, 8.641159057410036, 3.187554479977235),
    (-4.914812224256089, 5.353743894578409, 6.820304903335222),
    (4.648101268452274, 5.649683100386458, 7.039691484571728),
    (-6.1065551339833934, 0.6442873853787834, 5.590832086589032),
    (8.584089894604944, 9.710373438142884, 7.598797887631411),
    (7.047026526728722, 9.38109790814767, 9.937505974119713),
    (6.236780515139166, 4.321459186591518, 8.064561344604211),
    (4.194926738600142, 1.4398152520115985, 1.3089682399912959),
    (-4.128024696963816, -3.30564384777436, 1.6133104998266352),
    (-4.319764562987913, 7.424553564961041, 5.040579800358882),
    (-7.41473669135464, 6.58282985076568, 1.447375910040658),
    (6.457666938871046, -6.154755150693241, 3.5099606573343483),
    (-8.348802600345211, -3.7927801663634035, 6.813961328112321),
    (-5.950246070492664, 6.964308856528472, 5.323754284796183),
    (3.8507197088920897, 8.990529952909736, 6.7456215799710275),
    (-5.477896427986586, 9.606900519980343, 2.71896424426879),
    (2.4344666053544195, -0.7834507451722246, 9.86262812962443),
    (0.5497887106591666, 5.517190249702658, 8.3419047004753),
    (-4.096697749447844, -9.486642944458396, 4.686565164325697),
    (8.42456374971266, -8.604109022877687, 6.139148098503377),
    (-3.7696257993146993, 4.108294541990645, 6.4920978467774635),
    (9.939254700480646, -3.324633875051073, 6.462682253004077),
    (9.676045863689591, -2.189880709066494, 5.832357439003909),
    (5.7947734724791395, 2.678491400190378, 1.3242343820587936),
    (-6.4350445014050965, -3.8406613088585946, 1.0373909078348573),
    (6.5924984397951505, -8.461017347216611, 7.691983202784114),
    (-9.128263313854445, -7.875226113661872, 8.009077533546153),
    (3.2414168221627477, -5.344206337322146, 4.325775551651651),
    (-1.5555282051646238, -0.3226460606945629, 4.67502640295869),
    (-7.940318504506361, -0.07976401057980098, 7.210173818074953),
    (9.808433272798876, -0.217797127471421, 2.463605433395875),
    (1.0860775548973862, 7.908191473738544, 7.183784036286093),
    (-0.8458418637340692, 4.379188229125962, 5.110043765234808),
    (9.454296839897207, -0.7863131716797334, 8.376834758453452),
    (5.989414836346201, -3.8957822526247554, 3.93633849908707),
    (3.6421746505129953, -8.400399132445662, 1.3593502403354396),
    (5.244041744846941, -5.690585534769326, 1.424634163912235),
    (-2.397213778376339, 5.197168983380017, 1.753325153013421),
    (7.289677600611753, 9.122626057868427, 3.592646237228349),
    (7.58659397620535, -5.796247695393837, 2.188085191773591),
    (-4.982028235099287, -3.989563038242614, 1.6870434734050952),
    (-7.445204331935695, -9.220771273966808, 5.852088334250723),
    (-5.481385494127204, 3.7386476518603544, 5.452175541330746),
    (-4.477780782699526, -6.131582607772675, 9.011020277168097),
    (-6.627599707278462, -8.592129204323918, 4.499707986947076),
    (-9.290575731643123, 6.394918792566752, 1.4693112070067444),
    (9.971800111913495, -1.2331502771924434, 8.42773223333251),
    (-7.163949796504497, 8.644674324228362, 4.304441003544733),
    (6.728172857599905, 5.691027963930939, 7.760843797703215),
    (-1.816800191384722, 9.809354463158147, 3.5856959577927503),
    (5.184788933802324, -3.470981766652514, 3.7794052198496386),
    (0.9499414909410664, 4.4791428078715185, 5.569268154020824),
    (4.186572454155062, -9.980629417095672, 2.9885705994262723),
    (-8.592381733983368, 1.3864180605589098, 1.1606709480119264),
    (5.4014793261860845, 0.7069297325866071, 8.876886625250005),
    (2.285352039318621, 2.859731368999139, 4.452136632048596),
    (6.826589416926147, -2.3956797701712285, 3.3403087448913853),
    (8.413415452220875, -1.7093159540020224, 4.947598891652001),
    (-2.3119334785388768, -5.194147404735081, 2.2863460878846653),
    (5.02541743481447, 0.2862332599007722, 6.306627413911802),
    (-0.7093893999801519, -9.46658526937405, 6.960490032006582),
    (9.03174478469153, -1.0883410460992398, 1.4401451200001836),
    (-3.101234361100918, 6.593061211938892, 6.250987222051818),
    (8.862988329942244, -5.125859478493531, 2.2256936613893488),
    (-8.57957118436995, -6.433957635177787, 5.075813050253629),
    (-2.744081293096345, 4.408709579187091, 5.049535034369288),
    (-1.5771679248121568, -5.314126492100599, 5.337913948140397),
    (6.292639857993354, -7.4797132694626045, 8.960299240705742),
    (-3.9717568267280123, 7.073192440725574, 5.590594890762998),
    (-2.0076450265571815, -0.5524255859050591, 2.9938964632284004),
    (5.834957022473109, 4.359849015288251, 1.5601632376706083),
    (-1.549703080085136, 7.310215188918676, 6.731262164627182),
    (-8.279437014839662, -7.6652236500361015, 1.6753567512227159),
    (6.316057303321596, 1.1045304408766903, 8.178969102892406),
    (9.46313367078979, 7.94773026252145, 6.712064492781312),
    (-8.862102959204543, -5.075794866501326, 6.278679344171057),
    (6.527195377368766, 8.86647484837924, 4.754360010324966),
    (-9.87169181753371, 9.19395880237542, 4.1216139107739105),
    (-0.17183648847912636, 7.958137253188134, 5.182731465944785),
    (1.1569710777016056, -4.4356331134224565, 8.922791139466849),
    (-9.978626623184514, -7.932478760402628, 3.6766294517379325),
    (3.325392720619904, 4.9666974541994335, 8.428584740557799),
    (2.2689493415684954, 2.646937256080493, 4.314634774472573),
    (0.5356575721005541, 2.001470109563538, 8.470013550936645),
    (-2.1046219554263086, -6.587440732754022, 2.9715674727171164),
    (5.5786837318721005, 1.0151129988380152, 7.896060183823316),
    (-1.1857928656769356, 7.4106556137662665, 3.3394379320645595),
    (0.03218649473444657, 7.05352432068425, 7.072900789945622),
    (-5.789027226928505, 8.417217489618874, 2.31607810758602),
    (3.3027546398586853, 5.557099730718903, 4.2936355639831385),
    (-3.981616763749538, -3.9167607133038063, 8.65646167699189),
    (6.184693055667864, 5.9359484485974505, 8.431451593164777),
    (1.1672830030205859, 4.082855198348794, 8.885067980906587),
    (5.7202834423648525, -7.604253732391538, 3.715082936555364),
    (4.069112395704693, -4.577967550939055, 6.826259079997659),
    (-1.0061850364749692, 9.07537530069273, 4.537716087908991),
    (-6.496967194307029, 5.122316996768356, 4.2290715288889364),
];

/// Input of the radius-3 smoother fixture.
pub const SMOOTH_INPUT: [(f64, f64, f64); 10] = [
    (4.934228003809604, -1.231373934919608, 4.53898857886708),
    (0.21306836072205293, -9.068555432177952, 7.538795692618186),
    (-4.683175482376107, -2.9923432158645706, 3.6256478458721078),
    (5.81296657004669, 6.922822070174725, 3.4498860476249673),
    (5.081333411540214, 1.5105455201062075, 9.602908819367713),
    (0.930279515561903, -2.2516828057717024, 1.8050276188190837),
    (2.005408030081597, 0.8340246902578645, 8.668910018412035),
    (-2.437283687244072, 2.0370835501506352, 1.5696297734004776),
    (4.946506634546136, 5.871941044683169, 5.331639210382639),
    (2.4019768533874934, 4.090560620986006, 3.1725691900771804),
];

/// `smooth(SMOOTH_INPUT, 3)`.
pub const SMOOTH_EXPECTED: [(f64, f64, f64); 29] = [
    (2.9997502447864703, -1.0542732031983932, 5.380368688735937),
    (2.9554863514420986, -1.065552779639068, 5.344382109622592),
    (2.902197780813923, -1.0791320755482297, 5.300016998003213),
    (2.842463012125887, -1.0943540282205966, 5.250363783209011),
    (2.778860524601935, -1.1105615749508864, 5.198512894571203),
    (2.7139687974660114, -1.127097653033817, 5.147554761421003),
    (2.650366309942059, -1.143305199764107, 5.100579813089623),
    (2.5906315412540235, -1.1585271524364738, 5.0606784789082795),
    (2.5373429706258475, -1.1721064483456356, 5.0309411882081845),
    (2.493079077281476, -1.18338602478631, 5.014458370320554),
    (3.0324109816230944, -1.0459504089314877, 5.404886306012031),
    (2.4604183404448516, -1.1917088190532155, 5.014320454576603),
    (2.0420154870551364, -0.8966518725992909, 5.604309231654452),
    (0.9889423883331825, -0.42972937473211326, 5.180115116587795),
    (1.6651478560223372, 1.7046272648194754, 4.864807047697003),
    (2.677312475417137, 2.7164706700838437, 4.800081525440586),
    (2.190028230180109, 2.311861891628312, 4.760464831505186),
    (1.8072630075868634, 2.6804354774682833, 3.841844884463682),
    (2.4019768533874934, 4.090560620986006, 3.1725691900771804),
    (1.8268422646501132, 2.774799256731503, 3.7691206544671005),
    (1.8639495555720325, 2.8925067480488322, 3.6959331151131596),
    (1.9150412449336998, 3.028032008442368, 3.6232287685244673),
    (1.976573697316195, 3.175849094934211, 3.551954116823636),
    (2.045003277300597, 3.3304320645464602, 3.483055662133275),
    (2.116786349467985, 3.4862549743012137, 3.4174799065759953),
    (2.1883792783994394, 3.6377918812205703, 3.356173352274407),
    (2.2562384286760375, 3.779516842326629, 3.300082501351121),
    (2.31682016487886, 3.9059039146414882, 3.2501538559287475),
    (2.366580851588986, 4.011427155187248, 3.2073339181298968),
];

/// Raw samples of the strength-3 session fixture.
pub const SESSION_INPUT: [(f64, f64, f64); 10] = [
    (4.934228003809604, -1.231373934919608, 4.53898857886708),
    (0.21306836072205293, -9.068555432177952, 7.538795692618186),
    (-4.683175482376107, -2.9923432158645706, 3.6256478458721078),
    (5.81296657004669, 6.922822070174725, 3.4498860476249673),
    (5.081333411540214, 1.5105455201062075, 9.602908819367713),
    (0.930279515561903, -2.2516828057717024, 1.8050276188190837),
    (2.005408030081597, 0.8340246902578645, 8.668910018412035),
    (-2.437283687244072, 2.0370835501506352, 1.5696297734004776),
    (4.946506634546136, 5.871941044683169, 5.331639210382639),
    (2.4019768533874934, 4.090560620986006, 3.1725691900771804),
];

/// Concatenated submit/close output for `SESSION_INPUT` at strength 3.
pub const SESSION_EXPECTED: [(f64, f64, f64); 108] = [
    (2.9664847997148267, -4.49785119820529, 5.928479323027297),
    (2.966203230464083, -4.498318606530564, 5.928586803108407),
    (2.965887600416877, -4.498842556185511, 5.92870751890115),
    (2.9655515338917953, -4.499400430638257, 5.9288390788234535),
    (2.9652086552074213, -4.49996961335694, 5.928979091293249),
    (2.964872588682339, -4.500527487809687, 5.929125164728463),
    (2.9645569586351335, -4.501051437464633, 5.929274907547026),
    (2.964275389384389, -4.501518845789907, 5.929425928166867),
    (2.96404150524869, -4.501907096253643, 5.929575835005912),
    (2.9668912585525953, -4.4971764716712235, 5.92831363632826),
    (2.963868930546621, -4.502193572323974, 5.9297222364820925),
    (2.960173964127286, -4.50832726079117, 5.931478371544193),
    (2.9558472629818895, -4.515509636462476, 5.933590572357341),
    (2.9514251198994637, -4.522850446891236, 5.935842933768271),
    (2.9470984187540683, -4.530032822562542, 5.938195233427811),
    (2.949107244285859, -4.526698148143722, 5.937257443558562),
    (2.945739507364915, -4.532288631728215, 5.939356224044476),
    (2.9356625542406154, -4.549016494487556, 5.945272026573869),
    (2.917598330921372, -4.579003321339979, 5.955790259237506),
    (2.891314906324115, -4.622634120658491, 5.9711626286356),
    (2.856935135032451, -4.67970495236432, 5.991513704930739),
    (2.827044155571507, -4.729324335921754, 6.009279906811767),
    (2.7847088460515046, -4.799601456276422, 6.03463565776168),
    (2.728433474460388, -4.888034567096067, 6.067146059297639),
    (2.643553980824086, -5.006696203411088, 6.110057668204926),
    (2.5149155540712886, -5.160037941705336, 6.1623773626456675),
    (2.3264000427042038, -5.345674903857293, 6.219058458193899),
    (2.0619592339897728, -5.553820811942865, 6.271074250061533),
    (1.6815648074884764, -5.809511974389008, 6.321852799586325),
    (1.1966680755727734, -6.0525664205366, 6.3446790608208685),
    (0.6313896792103301, -6.21990513150897, 6.314726988922509),
    (0.024479304129594884, -6.250959141020067, 6.212316533815106),
    (-0.5752319411679929, -6.099244729470188, 6.028640009369688),
    (-1.1109651710308535, -5.735297222483373, 5.76712728189308),
    (-1.5210270230219731, -5.146464061172096, 5.442819334521361),
    (-1.7300230449071226, -4.31504271810601, 5.072751082754849),
    (-1.6978475852167427, -3.283702672353152, 4.695696150620342),
    (-1.408184706795421, -2.1123497557724615, 4.354278933853765),
    (-0.8733314353747346, -0.8736517322020476, 4.090784642478607),
    (-0.13235432804317324, 0.35553817312967406, 3.941298039438771),
    (0.7529599811277028, 1.4994550495469983, 3.9315861533913243),
    (1.7040200399528018, 2.4860262844414702, 4.0735327265163965),
    (2.6332729860226287, 3.252883502589475, 4.3617585720099905),
    (3.460592523803373, 3.758793877109807, 4.7711757028300825),
    (4.123778887325358, 3.9866462478002425, 5.2573254472656),
    (4.584129229953266, 3.9439567608189154, 5.76039085793497),
    (4.827511550665848, 3.660079249044572, 6.212714773026118),
    (4.861101890066424, 3.1812304024537434, 6.549437745023394),
    (4.1917269894538345, 1.8875563636415833, 6.223792044060418),
    (3.824246170242803, 1.2003936129414183, 6.080171167781892),
    (3.3889101019956454, 0.5575893664329827, 5.831396310347463),
    (2.9389509660831994, 0.016232113225300493, 5.545176770538262),
    (2.515572387075908, -0.38623340264291983, 5.293615125666612),
    (2.1471987085078834, -0.6299871950720113, 5.136910654390833),
    (1.845525130940751, -0.7132681591746863, 5.10743619868656),
    (1.605015836287207, -0.6512869167386209, 5.201030543964366),
    (1.4054761529321635, -0.4709980556121869, 5.377447732291141),
    (1.2193060446790607, -0.20398969650952722, 5.570953698783243),
    (1.022463065485723, 0.11770810266959104, 5.709557102043563),
    (0.8026113302303086, 0.4678176363280555, 5.7348346649061614),
    (0.5620339822529483, 0.8274940608003819, 5.6151359586551175),
    (0.319597756437374, 1.1868695470332347, 5.3529504519093),
    (0.1095539298458843, 1.545136280245703, 4.984156131176478),
    (-0.023178353446108406, 1.9084814957333212, 4.568613795943648),
    (-0.03596646134345747, 2.2832951586567884, 4.174597499339586),
    (0.09900234329747254, 2.672951840591155, 3.8617898875042957),
    (0.3875157214737409, 3.0746131959753766, 3.6682884564577614),
    (0.8109836660076992, 3.478104157878776, 3.6044413992028734),
    (1.3283897042119002, 3.866359023602944, 3.6532240075789177),
    (1.8824718342941695, 4.217448620084521, 3.7772110430640615),
    (2.4092638930336725, 4.50847043392451, 3.9293173503826915),
    (2.843484017796218, 4.716152945770938, 4.057369782984485),
    (3.166288914465359, 4.844904836689559, 4.1422685502676),
    (3.362566051446039, 4.8971437227094965, 4.1671445252294195),
    (3.4375698513749047, 4.883535335292599, 4.131012483117498),
    (3.413803696961431, 4.8213346638935475, 4.046495303520145),
    (3.3243030135128913, 4.731292554884586, 3.9337390990528647),
    (3.204761843287692, 4.633911168326467, 3.8146142306106285),
    (3.104607458871655, 4.557991662458128, 3.722030403559821),
    (3.0064269094181393, 4.488844757096594, 3.638758298085497),
    (2.9188234305328713, 4.429560272378596, 3.5682831818624003),
    (2.844373693562577, 4.380192845819018, 3.510276913447369),
    (2.781767074607247, 4.33905994597344, 3.4622134643699964),
    (2.727051515641289, 4.303237294461757, 3.4204439754115823),
    (2.6680968555768447, 4.264660187049894, 3.375477615815667),
    (2.6166843599469263, 4.231014736353222, 3.3362571691095013),
    (2.575412990162508, 4.204012551548772, 3.3047855204599337),
    (2.5441249836785307, 4.1835458463542485, 3.2809337969719246),
    (2.5223244294874068, 4.169287236579098, 3.264318343790425),
    (2.508292454950977, 4.16011058950311, 3.2536255312446585),
    (2.500304684831655, 4.154887052432684, 3.2475391847389066),
    (2.5045015854162425, 4.157631540474789, 3.2507369707145566),
    (2.494861242631538, 4.151327361736989, 3.2433915169312346),
    (2.4852826596978304, 4.145063591075834, 3.2360931604502357),
    (2.4760762746816094, 4.13904322669428, 3.229078422881634),
    (2.468300252622844, 4.133958231600928, 3.2231535528409925),
    (2.4619901189808915, 4.129831832956675, 3.2183456109437043),
    (2.4505667874358785, 4.122361755073936, 3.209641729045566),
    (2.46110080276788, 4.129250280852016, 3.2176680060457907),
    (2.460069835606319, 4.128576098748415, 3.216882471835179),
    (2.4589344899142, 4.127833660253207, 3.2160174076099137),
    (2.457732038109511, 4.127047338973725, 3.215101212668038),
    (2.4564997526102426, 4.126241508517308, 3.214162286307598),
    (2.4552749058343846, 4.125440542491289, 3.213229027826636),
    (2.4540947701999256, 4.124668814503006, 3.2123298365231987),
    (2.4529966181248555, 4.123950698159794, 3.211493111695328),
    (2.452017722027165, 4.123310567068987, 3.21074725264107),
    (2.4511953543248426, 4.122772794837924, 3.2101206586584676),
];
